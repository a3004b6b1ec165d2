/// TikTok Data API Library
///
/// Read-only HTTP service exposing TikTok posts scraped into a MongoDB
/// collection. Listing with pagination and filters, lookup by id, keyword
/// search, and aggregate statistics.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and wire DTOs
/// - `models`: Post and comment data structures
/// - `db`: Query functions over the post collection
/// - `routes`: Route table
/// - `error`: Error types and HTTP status mapping
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod routes;

pub use config::Config;
pub use error::{AppError, Result};
