/// OpenAPI documentation for the TikTok Data API
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "TikTok Data API",
        version = "1.0.0",
        description = "API for accessing TikTok scraped data",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Development server"),
    ),
    tags(
        (name = "health", description = "Service health checks"),
        (name = "posts", description = "Post listing, lookup, and search"),
        (name = "stats", description = "Aggregate collection statistics"),
    ),
    paths(
        crate::handlers::health::health_check,
        crate::handlers::posts::list_posts,
        crate::handlers::posts::get_post,
        crate::handlers::posts::search_posts,
        crate::handlers::stats::get_stats,
    ),
    components(schemas(
        crate::handlers::posts::PostResponse,
        crate::handlers::stats::StatsResponse,
        crate::models::Comment,
    ))
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/api/openapi.json"
    }
}
