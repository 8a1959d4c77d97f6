mod auth;
mod config;
mod db;
mod directory;
mod error;
mod handlers;
mod routes;
mod schema;
mod services;
mod state;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::auth::HostedAuthClient;
use crate::config::AppConfig;
use crate::directory::PgDirectory;
use crate::routes::app_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenv::dotenv().ok();
    let config = AppConfig::from_env()?;

    tracing::info!("Starting FriendLens backend server");

    // Initialize database pool
    let pool = db::establish_connection_pool(&config.database_url, config.database_pool_size)?;
    tracing::info!("Database connection pool initialized");

    // The one auth client for this process
    let auth = HostedAuthClient::new(&config.auth_service_url, &config.auth_service_anon_key);

    let state = AppState {
        auth: Arc::new(auth),
        directory: Arc::new(PgDirectory::new(pool)),
        secure_cookies: config.secure_cookies,
    };

    let app = create_app(state, &config);

    // Run server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_app(state: AppState, config: &AppConfig) -> Router {
    let app = app_router(state).layer(build_cors_layer(config.cors_allowed_origins.as_deref()));

    // Serve static frontend files if the directory exists
    let frontend_dir = &config.frontend_dir;
    if Path::new(frontend_dir).exists() {
        tracing::info!("Serving frontend from {}", frontend_dir);
        let index_path = format!("{}/index.html", frontend_dir);
        let serve_dir = ServeDir::new(frontend_dir).not_found_service(ServeFile::new(index_path));
        app.fallback_service(serve_dir)
    } else {
        tracing::info!(
            "Frontend directory not found at {}, serving API only",
            frontend_dir
        );
        app
    }
}

/// Build CORS layer from the configured origins.
///
/// Without configured origins the layer is permissive (development only).
fn build_cors_layer(allowed_origins: Option<&[String]>) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .unwrap_or_default()
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    if origins.is_empty() {
        tracing::warn!(
            "CORS_ALLOWED_ORIGINS not set or empty, using permissive CORS (not recommended for production)"
        );
        return CorsLayer::permissive();
    }

    tracing::info!("CORS configured for origins: {:?}", origins);
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
