/// Configuration management for the TikTok Data API
///
/// This module handles loading configuration from environment variables.
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Database configuration
    pub database: DatabaseConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// Database (MongoDB) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection string
    pub uri: String,
    /// Database name
    pub database: String,
    /// Collection holding the scraped posts
    pub collection: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// `MONGODB_URI` is required; everything else has a default.
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("API_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8000),
            },
            database: DatabaseConfig {
                uri: std::env::var("MONGODB_URI")
                    .map_err(|_| "MONGODB_URI must be set".to_string())?,
                database: std::env::var("MONGODB_DATABASE")
                    .unwrap_or_else(|_| "tiktok_scraper".to_string()),
                collection: std::env::var("MONGODB_COLLECTION")
                    .unwrap_or_else(|_| "new_posts_comment".to_string()),
            },
        })
    }

    /// Socket address string for the HTTP server
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}
