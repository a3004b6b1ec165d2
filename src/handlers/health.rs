use actix_web::{web, HttpResponse};
use chrono::Utc;
use mongodb::bson::doc;
use mongodb::Database;

/// Health check: reports whether the backing store is reachable
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Store reachable"),
        (status = 503, description = "Store unreachable"),
    ),
    tag = "health"
)]
pub async fn health_check(db: web::Data<Database>) -> HttpResponse {
    match db.run_command(doc! { "ping": 1 }).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "tiktok-data-api",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339(),
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("MongoDB connection failed: {}", e),
            "service": "tiktok-data-api",
        })),
    }
}
