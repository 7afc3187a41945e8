pub mod department;
pub mod function;
pub mod role;
pub mod task;

mod crud;

use crate::errors::AppError;
use actix_web::{web, HttpResponse};
use serde_json::json;

/// Registers every route plus the extractor configs that turn malformed
/// input into validation errors.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .route("/", web::get().to(root))
    .route("/api/health", web::get().to(health))
    .service(web::scope("/api/tasks").configure(task::configure))
    .service(
        web::scope("/api/organization")
            .configure(department::configure)
            .configure(role::configure)
            .configure(function::configure),
    );
}

pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Welcome to FlowForge API",
    }))
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
    }))
}
