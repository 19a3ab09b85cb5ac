use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod auth;
mod db;
mod domain;
mod rest;
mod sync;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Setting up database");
    let db = db::DbConnection::init().await?;

    let feed = Arc::new(sync::EntryFeed::new());
    let entry_service = domain::EntryService::new(db, feed.clone());
    let state = rest::AppState::new(entry_service, feed);

    // CORS setup to allow the rendering surface to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    // Set up our application routes
    let api_routes = Router::new()
        .route("/entries", post(rest::create_entry).get(rest::list_entries))
        .route("/entries/:id", delete(rest::delete_entry))
        .route("/series", get(rest::get_series))
        .route("/series/live", get(rest::live_series))
        .route("/locale/:lang", get(rest::get_locale));

    let app = Router::new().nest("/api", api_routes).layer(cors).with_state(state);

    // Start the server
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
