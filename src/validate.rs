use std::fmt;

/// A field-level validation failure, rendered next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    RequiredField {
        field: &'static str,
        label: &'static str,
    },
    LengthRange {
        field: &'static str,
        label: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },
    NotAnInteger {
        field: &'static str,
        label: &'static str,
    },
}

impl ValidationError {
    /// Name of the form field this error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::RequiredField { field, .. }
            | ValidationError::LengthRange { field, .. }
            | ValidationError::NotAnInteger { field, .. } => *field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::RequiredField { label, .. } => write!(f, "{label} is required"),
            ValidationError::LengthRange { label, min, max, .. } => {
                write!(f, "{label} must be between {min} and {max} characters")
            }
            ValidationError::NotAnInteger { label, .. } => write!(f, "{label} must be a whole number"),
        }
    }
}

/// Required text: absent or whitespace-only fails.
pub fn validate_required(
    value: Option<&str>,
    field: &'static str,
    label: &'static str,
) -> Option<ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => None,
        _ => Some(ValidationError::RequiredField { field, label }),
    }
}

/// Optional text: absent is fine, present must hold `min..=max` characters.
/// Length is counted in chars (Unicode scalar values), not bytes or UTF-16 units.
pub fn validate_length_range(
    value: Option<&str>,
    field: &'static str,
    label: &'static str,
    min: usize,
    max: usize,
) -> Option<ValidationError> {
    let v = value?;
    let actual = v.chars().count();
    if actual < min || actual > max {
        return Some(ValidationError::LengthRange { field, label, min, max, actual });
    }
    None
}

/// Optional integer given as raw form text.
pub fn parse_optional_int(
    value: Option<&str>,
    field: &'static str,
    label: &'static str,
) -> Result<Option<i32>, ValidationError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v
            .parse::<i32>()
            .map(Some)
            .map_err(|_| ValidationError::NotAnInteger { field, label }),
    }
}

/// Collected errors, looked up by field name from templates.
#[derive(Debug, Clone, Default)]
pub struct FieldErrors(pub Vec<ValidationError>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<String> {
        self.0
            .iter()
            .find(|e| e.field() == field)
            .map(ToString::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
