// src/api.rs
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing::info;

use crate::config::ApiConfig;
use crate::divider::ParagraphDivider;
use crate::handlers;

pub async fn start_api_server(
    config: &ApiConfig,
    divider: ParagraphDivider,
) -> std::io::Result<()> {
    let bind_addr = config.bind_addr();
    let divider = web::Data::new(divider);

    info!(addr = %bind_addr, "Starting API server");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .app_data(divider.clone())
            .wrap(cors)
            .route("/health", web::get().to(handlers::health_check))
            .route("/ready", web::get().to(handlers::ready_check))
            .route("/api/strategies", web::get().to(handlers::list_strategies))
            .route("/api/stats", web::post().to(handlers::stats))
            .route("/api/divide", web::post().to(handlers::divide))
            .route("/api/export", web::post().to(handlers::export))
    })
    .bind(bind_addr)?
    .run()
    .await
}
