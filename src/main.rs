use std::io;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tiktok_data_api::models::Post;
use tiktok_data_api::routes::configure_routes;
use tiktok_data_api::Config;

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate =
            signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = terminate.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    }
}

/// TikTok Data API
///
/// Read-only HTTP service over a MongoDB collection of scraped TikTok posts.
///
/// # Routes
///
/// - `GET /` - Welcome message
/// - `GET /posts` - List posts with pagination and optional filters
/// - `GET /posts/{post_id}` - Fetch a single post
/// - `GET /posts/search/{keyword}` - Keyword search
/// - `GET /stats` - Post and comment totals
/// - `GET /health` - Store reachability probe
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting tiktok-data-api v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let client = match Client::with_uri_str(&config.database.uri).await {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("MongoDB client creation failed: {}", e);
            eprintln!("ERROR: Failed to connect to MongoDB: {}", e);
            std::process::exit(1);
        }
    };

    let db = client.database(&config.database.database);

    // An unreachable store at startup is fatal, no degraded mode
    if let Err(e) = db.run_command(doc! { "ping": 1 }).await {
        tracing::error!("MongoDB ping failed: {}", e);
        eprintln!("ERROR: Failed to connect to MongoDB: {}", e);
        std::process::exit(1);
    }
    tracing::info!("Successfully connected to MongoDB");

    let collection: Collection<Post> = db.collection(&config.database.collection);

    let db_data = web::Data::new(db);
    let collection_data = web::Data::new(collection);

    let bind_address = config.bind_address();
    tracing::info!("Starting HTTP server at {}", bind_address);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(db_data.clone())
            .app_data(collection_data.clone())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(configure_routes)
    })
    .bind(&bind_address)?
    .workers(4)
    .disable_signals()
    .run();

    // Stop the server gracefully on SIGTERM or ctrl-c
    let server_handle = server.handle();
    actix_web::rt::spawn(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received");
        server_handle.stop(true).await;
    });

    server.await?;

    tracing::info!("tiktok-data-api shutting down");
    Ok(())
}
