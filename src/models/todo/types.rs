use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// A persisted to-do item.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub detail: Option<String>,
    pub completed: bool,
    pub priority: Option<i32>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The editable field set. Insert and update always take all of it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TodoDraft {
    pub title: String,
    pub detail: Option<String>,
    pub completed: bool,
    pub priority: Option<i32>,
    pub category: Option<String>,
}

/// Form data from the create/edit page.
///
/// `detail` keeps an empty submission as `Some("")` so that the length rule
/// can reject it; `priority` stays raw text until validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoForm {
    #[serde(default, deserialize_with = "empty_as_none_i64")]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default, deserialize_with = "checkbox")]
    pub completed: bool,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category: Option<String>,
    /// Selects create vs edit rendering; set by the handler, never submitted.
    #[serde(skip)]
    pub is_new: bool,
    #[serde(default)]
    pub csrf_token: String,
}

impl TodoForm {
    /// Blank form for the creation page.
    pub fn blank() -> Self {
        Self { is_new: true, ..Self::default() }
    }

    /// Pre-filled form for the edit page.
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            id: Some(todo.id),
            title: Some(todo.title.clone()),
            detail: todo.detail.clone(),
            completed: todo.completed,
            priority: todo.priority.map(|p| p.to_string()),
            category: todo.category.clone(),
            is_new: false,
            csrf_token: String::new(),
        }
    }

    pub fn title_value(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn detail_value(&self) -> &str {
        self.detail.as_deref().unwrap_or("")
    }

    pub fn priority_value(&self) -> &str {
        self.priority.as_deref().unwrap_or("")
    }

    pub fn category_value(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

fn empty_as_none_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match empty_as_none(deserializer)? {
        None => Ok(None),
        Some(v) => v
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// HTML checkboxes send their value only when ticked.
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(matches!(value.as_deref(), Some("true" | "on" | "1")))
}
