mod common;

use anyhow::Result;
use axum::http::StatusCode;

use common::{get_json, spawn_app};

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let app = spawn_app().await;
    let (status, body) = get_json(&app.router, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
    Ok(())
}

#[tokio::test]
async fn root_describes_service() -> Result<()> {
    let app = spawn_app().await;
    let (status, body) = get_json(&app.router, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Photo API (Rust)");
    assert!(body["version"].is_string());
    Ok(())
}
