use actix_session::Session;
use actix_web::HttpResponse;

use crate::errors::{AppError, redirect};
use crate::models::todo::{TodoDraft, TodoForm};
use crate::session::flash;
use crate::validate::{self, ValidationError};

pub const LIST_PATH: &str = "/todos";

pub const MSG_CREATED: &str = "New to-do created";
pub const MSG_UPDATED: &str = "To-do updated";
pub const MSG_DELETED: &str = "To-do deleted";
pub const MSG_NOT_FOUND: &str = "The requested to-do does not exist";

const DETAIL_MIN: usize = 1;
const DETAIL_MAX: usize = 100;

/// Convert a submitted form into the editable field set, or the list of
/// field errors that prevent it. Used by both create and update. Every field is checked; errors are not
/// short-circuited.
pub fn form_to_draft(form: &TodoForm) -> Result<TodoDraft, Vec<ValidationError>> {
    let mut errors = vec![];
    errors.extend(validate::validate_required(form.title.as_deref(), "title", "Title"));
    errors.extend(validate::validate_length_range(
        form.detail.as_deref(),
        "detail",
        "Detail",
        DETAIL_MIN,
        DETAIL_MAX,
    ));
    let priority = validate::parse_optional_int(form.priority.as_deref(), "priority", "Priority")
        .unwrap_or_else(|e| {
            errors.push(e);
            None
        });

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(TodoDraft {
        title: form.title_value().trim().to_string(),
        detail: form.detail.clone(),
        completed: form.completed,
        priority,
        category: form.category.as_ref().map(|c| c.trim().to_string()),
    })
}

/// Redirect to the list with a success message.
pub fn back_to_list_with_message(session: &Session, msg: &str) -> Result<HttpResponse, AppError> {
    flash::set_message(session, msg)?;
    Ok(redirect(LIST_PATH))
}

/// Redirect to the list with an error message.
pub fn back_to_list_with_error(session: &Session, msg: &str) -> Result<HttpResponse, AppError> {
    flash::set_error(session, msg)?;
    Ok(redirect(LIST_PATH))
}
