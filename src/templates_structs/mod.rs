// Template context structures for Askama templates.

use actix_session::Session;

use crate::errors::AppError;
use crate::session::csrf;
use crate::session::flash::Flash;

pub const APP_NAME: &str = "To-Do";

/// Common context shared by all pages.
/// Templates access these as `ctx.flash`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub app_name: &'static str,
    pub flash: Flash,
    pub csrf_token: String,
}

impl PageContext {
    /// Consumes any pending flash messages.
    pub fn build(session: &Session) -> Result<Self, AppError> {
        let flash = Flash::take(session);
        let csrf_token = csrf::get_or_create_token(session)?;
        Ok(Self { app_name: APP_NAME, flash, csrf_token })
    }
}

mod todo;

pub use todo::*;
