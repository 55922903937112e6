use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::AppError;
use crate::services::TodoService;
use crate::session::csrf;
use super::helpers::{MSG_DELETED, back_to_list_with_message};

#[derive(Deserialize)]
pub struct CsrfOnly {
    #[serde(default)]
    pub csrf_token: String,
}

pub async fn delete(
    service: web::Data<TodoService>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    service.delete(id).await?;
    log::info!("deleted to-do {id}");

    back_to_list_with_message(&session, MSG_DELETED)
}
