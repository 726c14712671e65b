// src/handlers.rs
use actix_web::{web, HttpResponse, Result as ActixResult};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::divider::{DivideError, ParagraphDivider};
use crate::metrics::TextStats;
use crate::strategy::Strategy;

#[derive(Deserialize)]
pub struct DivideRequest {
    pub text: String,
    #[serde(default = "default_strategy")]
    pub strategy: String,
}

#[derive(Deserialize)]
pub struct StatsRequest {
    pub text: String,
}

#[derive(Deserialize)]
pub struct ExportRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct DivideResponse {
    pub divided_text: String,
    pub strategy: &'static str,
    pub original: TextStats,
    pub divided: TextStats,
    pub generated_at: String,
}

fn default_strategy() -> String {
    "semantic".to_string()
}

fn error_body(kind: &str, message: String) -> serde_json::Value {
    json!({ "kind": kind, "message": message })
}

// === Handlers ===

pub async fn health_check() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json("OK"))
}

pub async fn ready_check(data: web::Data<ParagraphDivider>) -> ActixResult<HttpResponse> {
    if data.is_ready() {
        Ok(HttpResponse::Ok().json("Ready"))
    } else {
        Ok(HttpResponse::ServiceUnavailable()
            .json(error_body("not_configured", "No API key configured".into())))
    }
}

pub async fn list_strategies() -> ActixResult<HttpResponse> {
    let entries: Vec<_> = Strategy::all()
        .into_iter()
        .map(|s| json!({ "id": s.id, "description": s.description }))
        .collect();
    Ok(HttpResponse::Ok().json(entries))
}

pub async fn stats(req: web::Json<StatsRequest>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(TextStats::of(&req.text)))
}

pub async fn divide(
    data: web::Data<ParagraphDivider>,
    req: web::Json<DivideRequest>,
) -> ActixResult<HttpResponse> {
    // Presence validation lives here, not in the service.
    if req.text.trim().is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(error_body("empty_input", "Text must not be empty".into())));
    }

    let request_id = Uuid::new_v4();
    info!(%request_id, strategy = %req.strategy, input_len = req.text.len(), "Divide request");

    match data.divide(&req.text, &req.strategy).await {
        Ok(divided_text) => {
            let response = DivideResponse {
                strategy: Strategy::resolve(&req.strategy).id,
                original: TextStats::of(&req.text),
                divided: TextStats::of(&divided_text),
                generated_at: Utc::now().to_rfc3339(),
                divided_text,
            };
            info!(%request_id, paragraphs = response.divided.paragraphs, "Divide complete");
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e @ DivideError::NotConfigured) => {
            error!(%request_id, "Divide rejected: {}", e);
            Ok(HttpResponse::ServiceUnavailable().json(error_body(e.kind(), e.to_string())))
        }
        Err(e @ DivideError::Completion(_)) => {
            error!(%request_id, "Divide failed: {}", e);
            Ok(HttpResponse::BadGateway().json(error_body(e.kind(), e.to_string())))
        }
    }
}

/// Returns the divided text as a plain-text download, byte-exact, with no
/// added metadata.
pub async fn export(req: web::Json<ExportRequest>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"divided_paragraphs.txt\"",
        ))
        .body(req.text.clone()))
}
