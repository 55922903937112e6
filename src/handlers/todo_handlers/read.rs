use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::errors::{AppError, render};
use crate::models::todo::TodoForm;
use crate::services::TodoService;
use crate::templates_structs::{PageContext, TodoDetailTemplate, TodoFormTemplate};
use crate::validate::FieldErrors;
use super::helpers::{MSG_NOT_FOUND, back_to_list_with_error};

pub async fn detail(
    service: web::Data<TodoService>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    match service.find_by_id(id).await? {
        Some(todo) => {
            let ctx = PageContext::build(&session)?;
            render(TodoDetailTemplate { ctx, todo })
        }
        None => {
            log::warn!("to-do {id} not found for detail view");
            back_to_list_with_error(&session, MSG_NOT_FOUND)
        }
    }
}

pub async fn edit_form(
    service: web::Data<TodoService>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    match service.find_by_id(id).await? {
        Some(todo) => {
            let ctx = PageContext::build(&session)?;
            let tmpl = TodoFormTemplate {
                ctx,
                form: TodoForm::from_todo(&todo),
                errors: FieldErrors::default(),
            };
            render(tmpl)
        }
        None => {
            log::warn!("to-do {id} not found for edit");
            back_to_list_with_error(&session, MSG_NOT_FOUND)
        }
    }
}
