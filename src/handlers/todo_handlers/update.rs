use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::errors::{AppError, render};
use crate::models::todo::TodoForm;
use crate::services::TodoService;
use crate::session::csrf;
use crate::templates_structs::{PageContext, TodoFormTemplate};
use crate::validate::FieldErrors;
use super::helpers::{
    MSG_NOT_FOUND, MSG_UPDATED, back_to_list_with_error, back_to_list_with_message, form_to_draft,
};

pub async fn update(
    service: web::Data<TodoService>,
    session: Session,
    form: web::Form<TodoForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let mut form = form.into_inner();
    form.is_new = false;

    let draft = match form_to_draft(&form) {
        Ok(draft) => draft,
        Err(errors) => {
            let ctx = PageContext::build(&session)?;
            let tmpl = TodoFormTemplate { ctx, form, errors: FieldErrors(errors) };
            return render(tmpl);
        }
    };

    let Some(id) = form.id else {
        log::warn!("update submitted without an id");
        return back_to_list_with_error(&session, MSG_NOT_FOUND);
    };

    match service.update(id, &draft).await {
        Ok(todo) => {
            log::info!("updated to-do {}", todo.id);
            back_to_list_with_message(&session, MSG_UPDATED)
        }
        Err(AppError::NotFound) => {
            log::warn!("to-do {id} not found for update");
            back_to_list_with_error(&session, MSG_NOT_FOUND)
        }
        Err(e) => Err(e),
    }
}
