//! Route configuration
//!
//! Centralized route setup; handler modules own the behavior, this file only
//! wires paths.

use actix_web::{web, HttpResponse};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::openapi::ApiDoc;

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Service-level endpoints
        .route("/", web::get().to(root))
        .route("/health", web::get().to(handlers::health_check))
        .route(ApiDoc::openapi_json_path(), web::get().to(openapi_json))
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}")
                .url(ApiDoc::openapi_json_path(), ApiDoc::openapi()),
        )
        // API routes
        .route("/stats", web::get().to(handlers::get_stats))
        .service(
            web::scope("/posts")
                .service(web::resource("").route(web::get().to(handlers::list_posts)))
                // {keyword:.*} so that an empty keyword is still routable
                .service(
                    web::resource("/search/{keyword:.*}")
                        .route(web::get().to(handlers::search_posts)),
                )
                .service(web::resource("/{post_id}").route(web::get().to(handlers::get_post))),
        );
}

/// Welcome message
async fn root() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "message": "Welcome to TikTok Data API" }))
}

/// OpenAPI JSON endpoint
async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
