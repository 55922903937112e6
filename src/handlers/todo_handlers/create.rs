use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::errors::{AppError, render};
use crate::models::todo::TodoForm;
use crate::services::TodoService;
use crate::session::csrf;
use crate::templates_structs::{PageContext, TodoFormTemplate};
use crate::validate::FieldErrors;
use super::helpers::{MSG_CREATED, back_to_list_with_message, form_to_draft};

pub async fn new_form(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session)?;

    let tmpl = TodoFormTemplate {
        ctx,
        form: TodoForm::blank(),
        errors: FieldErrors::default(),
    };
    render(tmpl)
}

pub async fn create(
    service: web::Data<TodoService>,
    session: Session,
    form: web::Form<TodoForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let mut form = form.into_inner();
    form.is_new = true;

    let draft = match form_to_draft(&form) {
        Ok(draft) => draft,
        Err(errors) => {
            let ctx = PageContext::build(&session)?;
            let tmpl = TodoFormTemplate { ctx, form, errors: FieldErrors(errors) };
            return render(tmpl);
        }
    };

    let todo = service.create(&draft).await?;
    log::info!("created to-do {} '{}'", todo.id, todo.title);

    back_to_list_with_message(&session, MSG_CREATED)
}
