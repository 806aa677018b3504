use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth;
use crate::error::ApiError;
use crate::AppState;

/// Authenticated identity attached to the request once the gate passes.
/// Carries the claims of the verified token; lives for one request.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
}

/// Authentication gate layered over every photo route.
///
/// A missing Authorization header and a verified token referencing a user
/// that no longer exists both answer "Unauthorized"; only a present but
/// unverifiable credential answers "Invalid token".
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())?;

    let claims = auth::decode_token(&token).map_err(|e| {
        tracing::debug!("Token verification failed: {}", e);
        ApiError::invalid_token("Invalid token")
    })?;

    let user = state
        .store
        .find_user(claims.id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Unauthorized"))?;

    tracing::debug!("Authenticated user {} ({})", user.id, user.email);

    request.extensions_mut().insert(AuthUser {
        id: claims.id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Extract the token from the Authorization header, expecting the literal
/// `Bearer ` scheme prefix.
fn bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("Unauthorized"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::invalid_token("Invalid token"))?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::invalid_token("Invalid token"))?;

    if token.is_empty() {
        return Err(ApiError::invalid_token("Invalid token"));
    }

    Ok(token.to_string())
}
