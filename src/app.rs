use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{HttpResponse, cookie::Key, web};

use crate::errors::redirect;
use crate::handlers::todo_handlers;

const NOT_FOUND_PAGE: &str = include_str!("../templates/errors/404.html");

/// Cookie-backed session carrying flash messages and the CSRF token.
pub fn session_middleware(key: Key, secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(secure)
        .cookie_http_only(true)
        .build()
}

/// Register every route. Shared by the server and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(|| async { redirect("/todos") }))
        // /todos/form BEFORE /todos/{id} to avoid routing conflict
        .route("/todos", web::get().to(todo_handlers::list))
        .route("/todos/form", web::get().to(todo_handlers::new_form))
        .route("/todos/save", web::post().to(todo_handlers::create))
        .route("/todos/update", web::post().to(todo_handlers::update))
        .route("/todos/edit/{id}", web::get().to(todo_handlers::edit_form))
        .route("/todos/delete/{id}", web::post().to(todo_handlers::delete))
        .route("/todos/{id}", web::get().to(todo_handlers::detail));
}

/// Fallback for unmatched paths (must be registered last).
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(NOT_FOUND_PAGE)
}
