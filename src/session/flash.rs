use actix_session::Session;

use crate::errors::AppError;

const MESSAGE_KEY: &str = "flash_message";
const ERROR_KEY: &str = "flash_error_message";

/// One-shot messages carried across a redirect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flash {
    pub message: Option<String>,
    pub error_message: Option<String>,
}

impl Flash {
    /// Read and clear both slots. Whatever was set before the redirect is
    /// shown on exactly one page.
    pub fn take(session: &Session) -> Self {
        Self {
            message: take_slot(session, MESSAGE_KEY),
            error_message: take_slot(session, ERROR_KEY),
        }
    }
}

pub fn set_message(session: &Session, msg: &str) -> Result<(), AppError> {
    session.insert(MESSAGE_KEY, msg)?;
    Ok(())
}

pub fn set_error(session: &Session, msg: &str) -> Result<(), AppError> {
    session.insert(ERROR_KEY, msg)?;
    Ok(())
}

fn take_slot(session: &Session, key: &str) -> Option<String> {
    session.remove_as::<String>(key).and_then(Result::ok)
}
