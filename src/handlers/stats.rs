/// Stats handler - aggregate statistics over the post collection
use actix_web::{web, HttpResponse};
use mongodb::Collection;
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::post_repo;
use crate::error::Result;
use crate::models::Post;

/// Aggregate collection statistics
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub total_posts: u64,
    pub total_comments: i64,
}

/// Get post and comment totals for the whole collection
#[utoipa::path(
    get,
    path = "/stats",
    responses(
        (status = 200, description = "Collection totals", body = StatsResponse),
        (status = 500, description = "Store failure"),
    ),
    tag = "stats"
)]
pub async fn get_stats(collection: web::Data<Collection<Post>>) -> Result<HttpResponse> {
    let total_posts = post_repo::count_posts(&collection).await?;
    let total_comments = post_repo::count_comments(&collection).await?;

    Ok(HttpResponse::Ok().json(StatsResponse {
        total_posts,
        total_comments,
    }))
}
