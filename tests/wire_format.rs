//! Wire-format tests for the HTTP surface that need no live store.
//!
//! Coverage:
//! - Welcome message on the root endpoint
//! - OpenAPI document availability
//! - Post and stats JSON shapes
//! - Error body contract ({"detail": ...})

use actix_web::{body::to_bytes, error::ResponseError, http::StatusCode, test, App};
use mongodb::bson::oid::ObjectId;
use serde_json::Value;
use tiktok_data_api::error::AppError;
use tiktok_data_api::handlers::posts::PostResponse;
use tiktok_data_api::handlers::stats::StatsResponse;
use tiktok_data_api::models::{Comment, Post};
use tiktok_data_api::routes::configure_routes;

fn sample_post() -> Post {
    Post {
        id: ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap(),
        title: "dance challenge".to_string(),
        video_url: "https://example.com/v/1".to_string(),
        like: "1.2M".to_string(),
        comment: "4520".to_string(),
        share: "980".to_string(),
        date: "2024-03-01".to_string(),
        username: "alice".to_string(),
        comments: vec![Comment {
            username: "bob".to_string(),
            text: "nice".to_string(),
            date: "2024-03-02".to_string(),
            likes: "12".to_string(),
        }],
        hashtags: vec!["dance".to_string(), "fyp".to_string()],
    }
}

#[actix_web::test]
async fn root_returns_welcome_message() {
    let app = test::init_service(App::new().configure(configure_routes)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["message"], "Welcome to TikTok Data API");
}

#[actix_web::test]
async fn openapi_document_is_served() {
    let app = test::init_service(App::new().configure(configure_routes)).await;

    let req = test::TestRequest::get()
        .uri("/api/openapi.json")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["info"]["title"], "TikTok Data API");
    assert!(body["paths"].get("/posts").is_some());
    assert!(body["paths"].get("/posts/{post_id}").is_some());
    assert!(body["paths"].get("/stats").is_some());
}

#[core::prelude::v1::test]
fn post_wire_shape_matches_contract() {
    let response = PostResponse::from(sample_post());
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["_id"], "507f1f77bcf86cd799439011");
    for key in [
        "title",
        "video_url",
        "like",
        "comment",
        "share",
        "date",
        "username",
        "comments",
        "hashtags",
    ] {
        assert!(json.get(key).is_some(), "missing field {key}");
    }
    assert_eq!(json["comments"][0]["likes"], "12");
    assert_eq!(json["hashtags"][0], "dance");
    // the identifier is exposed only under "_id"
    assert!(json.get("id").is_none());
}

#[core::prelude::v1::test]
fn stats_wire_shape_matches_contract() {
    let json = serde_json::to_value(StatsResponse {
        total_posts: 2,
        total_comments: 5,
    })
    .unwrap();

    assert_eq!(json["total_posts"], 2);
    assert_eq!(json["total_comments"], 5);
}

#[actix_web::test]
async fn error_body_carries_detail() {
    let err = AppError::NotFound("Post not found".to_string());
    let response = err.error_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = to_bytes(response.into_body()).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["detail"], "Post not found");
}

#[actix_web::test]
async fn invalid_id_maps_to_bad_request() {
    let err = AppError::InvalidId("invalid character".to_string());
    let response = err.error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
