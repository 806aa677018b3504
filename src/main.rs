use std::sync::Arc;

use photo_api_rust::database::postgres::{self, PgStore};
use photo_api_rust::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    // Initialize configuration (this loads the config singleton)
    let config = photo_api_rust::config::config();

    tracing_subscriber::fmt::init();
    tracing::info!("Starting Photo API in {:?} mode", config.environment);

    let pool = postgres::connect().await?;
    let state = AppState {
        store: Arc::new(PgStore::new(pool)),
    };

    let app = app(state);

    // Allow tests or deployments to override port via env
    let port = std::env::var("PHOTO_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    println!("🚀 Photo API Rust server listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
