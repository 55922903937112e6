//! Shared test infrastructure for store and handler tests.
//!
//! Databases come from `#[sqlx::test]`, which creates a fresh database per
//! test and applies `migrations/`. Handler tests drive the real route table
//! through `actix_web::test` and carry the session cookie by hand.
#![allow(dead_code, unused_macros)]

use std::time::Duration;

use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{self, ContentType};
use actix_web::test::{TestRequest, read_body};
use regex::Regex;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use todo_web::models::todo::{TodoDraft, TodoStore};
use todo_web::services::TodoService;

/// Name of the cookie written by `CookieSessionStore`.
pub const SESSION_COOKIE: &str = "id";

/// Build the full application around `pool` and initialise it as a test service.
macro_rules! test_app {
    ($pool:expr) => {{
        let service = actix_web::web::Data::new(todo_web::services::TodoService::new(
            todo_web::models::todo::TodoStore::new($pool),
        ));
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(todo_web::app::session_middleware(
                    actix_web::cookie::Key::generate(),
                    false,
                ))
                .app_data(service)
                .configure(todo_web::app::configure)
                .default_service(actix_web::web::to(todo_web::app::not_found)),
        )
        .await
    }};
}

/// Pool that never connects, for routes that do not touch the database.
pub fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .connect_lazy("postgres://localhost/unused")
        .expect("invalid database url")
}

/// Pool pointing at a closed port; every query fails once the acquire times out.
pub fn unreachable_pool() -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(1))
        .connect_lazy("postgres://127.0.0.1:1/unused")
        .expect("invalid database url")
}

pub fn service(pool: &PgPool) -> TodoService {
    TodoService::new(TodoStore::new(pool.clone()))
}

pub fn draft(title: &str, detail: Option<&str>) -> TodoDraft {
    TodoDraft {
        title: title.to_string(),
        detail: detail.map(String::from),
        ..TodoDraft::default()
    }
}

pub async fn row_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM todos")
        .fetch_one(pool)
        .await
        .expect("count query failed")
}

// ============================================================================
// REQUESTS / RESPONSES
// ============================================================================

pub fn get(uri: &str, cookie: &Cookie<'static>) -> TestRequest {
    TestRequest::get().uri(uri).cookie(cookie.clone())
}

pub fn post_form(uri: &str, cookie: &Cookie<'static>, fields: &[(&str, &str)]) -> TestRequest {
    let body = serde_urlencoded::to_string(fields).expect("form encoding failed");
    TestRequest::post()
        .uri(uri)
        .cookie(cookie.clone())
        .insert_header(ContentType::form_url_encoded())
        .set_payload(body)
}

/// The session cookie set by this response, if the session changed.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
}

/// Replace `cookie` with the one carried by `resp`, when there is one.
pub fn track_cookie<B>(cookie: &mut Cookie<'static>, resp: &ServiceResponse<B>) {
    if let Some(updated) = session_cookie(resp) {
        *cookie = updated;
    }
}

pub fn location<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

pub async fn body_string<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("body is not UTF-8")
}

// ============================================================================
// HTML SCRAPING
// ============================================================================

pub fn extract_csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token"\s+value="([^"]+)""#).expect("Failed to compile regex");
    re.captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "invalid_token".to_string())
}

/// Text of the error rendered under `field`, if any.
pub fn field_error(html: &str, field: &str) -> Option<String> {
    let pattern = format!(r#"data-field="{}">([^<]*)<"#, regex::escape(field));
    let re = Regex::new(&pattern).expect("Failed to compile regex");
    re.captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn flash_success(html: &str) -> Option<String> {
    let re = Regex::new(r#"class="flash flash-success"[^>]*>([^<]*)<"#).expect("Failed to compile regex");
    re.captures(html).and_then(|c| c.get(1)).map(|m| m.as_str().to_string())
}

pub fn flash_error(html: &str) -> Option<String> {
    let re = Regex::new(r#"class="flash flash-error"[^>]*>([^<]*)<"#).expect("Failed to compile regex");
    re.captures(html).and_then(|c| c.get(1)).map(|m| m.as_str().to_string())
}

/// Form action the page posts to.
pub fn form_action(html: &str) -> Option<String> {
    let re = Regex::new(r#"action="(/todos/(?:save|update))""#).expect("Failed to compile regex");
    re.captures(html).and_then(|c| c.get(1)).map(|m| m.as_str().to_string())
}
