mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{App, HttpServer, web};

use application::author_service::AuthorService;
use application::post_service::PostService;
use data::author_repository::PostgresAuthorRepository;
use data::post_repository::PostgresPostRepository;
use infrastructure::config::AppConfig;
use infrastructure::database::{create_pool, run_migrations};
use infrastructure::logging::init_logging;
use presentation::handlers;
use presentation::middleware::{RequestIdMiddleware, TimingMiddleware};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let config = AppConfig::from_env().expect("invalid configuration");
    let pool = create_pool(&config.database_url)
        .await
        .expect("failed to connect to database");
    run_migrations(&pool)
        .await
        .expect("failed to run migrations");

    let author_repo = Arc::new(PostgresAuthorRepository::new(pool.clone()));
    let post_repo = Arc::new(PostgresPostRepository::new(pool.clone()));

    let author_service = AuthorService::new(Arc::clone(&author_repo));
    let post_service = PostService::new(Arc::clone(&post_repo), Arc::clone(&author_repo));

    let config_data = config.clone();

    HttpServer::new(move || {
        let cors = build_cors(&config_data);
        App::new()
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .wrap(TimingMiddleware)
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "no-referrer"))
                    .add(("Permissions-Policy", "geolocation=()"))
                    .add(("Cross-Origin-Opener-Policy", "same-origin")),
            )
            .wrap(cors)
            .app_data(web::Data::new(author_service.clone()))
            .app_data(web::Data::new(post_service.clone()))
            // `new` routes are registered ahead of the `{id}` routes so the
            // literal segment matches first
            .service(handlers::author::list_authors)
            .service(handlers::author::new_author)
            .service(handlers::author::create_author)
            .service(handlers::author::edit_author)
            .service(handlers::author::get_author)
            .service(handlers::author::update_author)
            .service(handlers::post::list_posts)
            .service(handlers::post::new_post)
            .service(handlers::post::create_post)
            .service(handlers::post::edit_post)
            .service(handlers::post::get_post)
            .service(handlers::post::update_post)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn build_cors(config: &AppConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH"])
        .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
        .supports_credentials()
        .max_age(3600);

    for origin in &config.cors_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
