/// HTTP handlers for the TikTok Data API
///
/// This module contains handlers for:
/// - Posts: listing with pagination/filters, lookup by id, keyword search
/// - Stats: aggregate collection statistics
/// - Health: store reachability probe
pub mod health;
pub mod posts;
pub mod stats;

// Re-export handler functions at module level
pub use health::health_check;
pub use posts::{get_post, list_posts, search_posts};
pub use stats::get_stats;
