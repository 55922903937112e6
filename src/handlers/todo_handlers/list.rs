use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::errors::{AppError, render};
use crate::services::TodoService;
use crate::templates_structs::{PageContext, TodoListTemplate};

pub async fn list(
    service: web::Data<TodoService>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let todos = service.find_all().await?;
    let count = service.count().await?;
    let ctx = PageContext::build(&session)?;

    let tmpl = TodoListTemplate { ctx, todos, count };
    render(tmpl)
}
