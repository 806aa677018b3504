use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use photo_api_rust::auth::{self, password, Claims};
use photo_api_rust::database::memory::MemoryStore;
use photo_api_rust::{app, AppState};

pub struct TestApp {
    pub router: Router,
    pub user_token: String,
    pub ghost_token: String,
}

/// Router over a seeded in-memory store: one user ("luki", id 1) and one
/// default photo (id 1). `ghost_token` is validly signed but references a
/// user id that was never seeded.
pub async fn spawn_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());

    let hashed = password::hash("password").expect("hash fixture password");
    let user = store.seed_user("luki", "luki@mail.com", &hashed).await;
    store
        .seed_photo(
            "Default Photo",
            "Default Photo caption",
            "http://image.com/defaultphoto.png",
            user.id,
        )
        .await;

    let user_token =
        auth::generate_token(&Claims::new(user.id, user.email.as_str())).expect("sign token");
    let ghost_token =
        auth::generate_token(&Claims::new(99, "notexists@gmail.com")).expect("sign token");

    TestApp {
        router: app(AppState { store }),
        user_token,
        ghost_token,
    }
}

pub async fn get_json(
    router: &Router,
    path: &str,
    authorization: Option<&str>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(Method::GET).uri(path);
    if let Some(value) = authorization {
        request = request.header(header::AUTHORIZATION, value);
    }
    send(router, request.body(Body::empty()).expect("request")).await
}

pub async fn post_json(
    router: &Router,
    path: &str,
    authorization: Option<&str>,
    body: &Value,
) -> (StatusCode, Value) {
    let mut request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = authorization {
        request = request.header(header::AUTHORIZATION, value);
    }
    send(
        router,
        request
            .body(Body::from(body.to_string()))
            .expect("request"),
    )
    .await
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
