use actix_session::Session;

use crate::errors::AppError;

const TOKEN_KEY: &str = "csrf_token";
const TOKEN_BYTES: usize = 32;

/// Get the CSRF token from the session, or generate a new one.
pub fn get_or_create_token(session: &Session) -> Result<String, AppError> {
    if let Some(token) = session.get::<String>(TOKEN_KEY)? {
        return Ok(token);
    }
    let token = generate_token();
    session.insert(TOKEN_KEY, &token)?;
    Ok(token)
}

/// Validate the submitted CSRF token against the session token.
pub fn validate_csrf(session: &Session, submitted: &str) -> Result<(), AppError> {
    let stored = session.get::<String>(TOKEN_KEY)?.unwrap_or_default();
    if stored.is_empty() || !constant_time_eq(&stored, submitted) {
        return Err(AppError::Csrf);
    }
    Ok(())
}

fn generate_token() -> String {
    hex::encode(rand::random::<[u8; TOKEN_BYTES]>())
}

/// Compares every byte regardless of where the first mismatch is.
fn constant_time_eq(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a.bytes().zip(b.bytes()).map(|(x, y)| x ^ y).fold(0, |acc, d| acc | d) == 0
}
