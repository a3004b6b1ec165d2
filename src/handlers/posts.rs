/// Post handlers - HTTP endpoints for reading scraped posts
use actix_web::{web, HttpResponse};
use mongodb::Collection;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::db::{self, PostFilter};
use crate::error::{AppError, Result};
use crate::models::{Comment, Post, PostId};

const MAX_LIMIT: i64 = 100;

/// Query parameters for GET /posts
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPostsQuery {
    /// Number of matching posts to skip (default: 0)
    #[serde(default)]
    pub skip: i64,
    /// Maximum number of posts to return (default: 10, max: 100)
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Exact-match filter on the author username
    pub username: Option<String>,
    /// Exact-match filter on a single hashtag
    pub hashtag: Option<String>,
}

fn default_limit() -> i64 {
    10
}

impl ListPostsQuery {
    /// Reject out-of-range pagination before any store query is issued
    fn validate(&self) -> Result<()> {
        if self.skip < 0 {
            return Err(AppError::Validation(format!(
                "skip must be non-negative, got {}",
                self.skip
            )));
        }
        if self.limit < 1 || self.limit > MAX_LIMIT {
            return Err(AppError::Validation(format!(
                "limit must be between 1 and {}, got {}",
                MAX_LIMIT, self.limit
            )));
        }
        Ok(())
    }
}

/// Wire representation of a post; `_id` carries the hex form of the store id
#[derive(Debug, Serialize, ToSchema)]
pub struct PostResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub video_url: String,
    pub like: String,
    pub comment: String,
    pub share: String,
    pub date: String,
    pub username: String,
    pub comments: Vec<Comment>,
    pub hashtags: Vec<String>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_hex(),
            title: post.title,
            video_url: post.video_url,
            like: post.like,
            comment: post.comment,
            share: post.share,
            date: post.date,
            username: post.username,
            comments: post.comments,
            hashtags: post.hashtags,
        }
    }
}

/// List posts with pagination and optional exact-match filters
#[utoipa::path(
    get,
    path = "/posts",
    params(ListPostsQuery),
    responses(
        (status = 200, description = "Matching posts in store order", body = [PostResponse]),
        (status = 400, description = "Pagination parameters out of range"),
        (status = 500, description = "Store failure"),
    ),
    tag = "posts"
)]
pub async fn list_posts(
    collection: web::Data<Collection<Post>>,
    query: web::Query<ListPostsQuery>,
) -> Result<HttpResponse> {
    query.validate()?;

    let filter = PostFilter {
        username: query.username.clone(),
        hashtag: query.hashtag.clone(),
    };

    tracing::info!(filter = ?filter.to_document(), skip = query.skip, limit = query.limit, "executing post query");

    let posts =
        db::post_repo::list_posts(&collection, query.skip as u64, query.limit, &filter).await?;

    tracing::info!(count = posts.len(), "found posts");

    let body: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// Get a single post by its identifier
#[utoipa::path(
    get,
    path = "/posts/{post_id}",
    params(("post_id" = String, Path, description = "Hex post identifier")),
    responses(
        (status = 200, description = "The matching post", body = PostResponse),
        (status = 404, description = "No post with this id"),
        (status = 400, description = "Malformed id or lookup failure"),
    ),
    tag = "posts"
)]
pub async fn get_post(
    collection: web::Data<Collection<Post>>,
    post_id: web::Path<String>,
) -> Result<HttpResponse> {
    let id = PostId::parse(&post_id)?;

    // Store failures on this endpoint map to 400, not 500
    let post = db::post_repo::get_post_by_id(&collection, &id)
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// Search posts by keyword across title, username and hashtags
#[utoipa::path(
    get,
    path = "/posts/search/{keyword}",
    params(("keyword" = String, Path, description = "Case-insensitive substring; empty matches everything")),
    responses(
        (status = 200, description = "Matching posts", body = [PostResponse]),
        (status = 500, description = "Store failure"),
    ),
    tag = "posts"
)]
pub async fn search_posts(
    collection: web::Data<Collection<Post>>,
    keyword: web::Path<String>,
) -> Result<HttpResponse> {
    let posts = db::post_repo::search_posts(&collection, &keyword).await?;

    tracing::info!(keyword = %keyword.as_str(), count = posts.len(), "search complete");

    let body: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}
