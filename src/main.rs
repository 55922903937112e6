use actix_web::{App, HttpServer, middleware, web};

use todo_web::config::AppConfig;
use todo_web::models::todo::TodoStore;
use todo_web::services::TodoService;
use todo_web::{app, db};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let pool = db::init_pool(&config).await.map_err(std::io::Error::other)?;
    db::run_migrations(&pool).await.map_err(std::io::Error::other)?;

    let service = web::Data::new(TodoService::new(TodoStore::new(pool)));
    let secret_key = config.session_key();
    let cookie_secure = config.cookie_secure;

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(app::session_middleware(secret_key.clone(), cookie_secure))
            .wrap(middleware::Logger::default())
            .app_data(service.clone())
            .service(actix_files::Files::new("/static", "./static"))
            .configure(app::configure)
            .default_service(web::to(app::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
