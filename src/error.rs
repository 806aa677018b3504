// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request - one or more field violations, list-valued
    ValidationFailed(Vec<String>),

    // 401 Unauthorized - no credential, or credential referencing no user
    Unauthorized(String),

    // 401 Unauthorized - malformed or unverifiable credential
    InvalidToken(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::ValidationFailed(_) => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::InvalidToken(_) => 401,
            ApiError::NotFound(_) => 404,
            ApiError::Internal(_) => 500,
        }
    }

    /// Convert to JSON response body. Validation failures carry the full list
    /// of violation messages; every other kind carries a single message.
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::ValidationFailed(messages) => json!({ "message": messages }),
            ApiError::Unauthorized(msg)
            | ApiError::InvalidToken(msg)
            | ApiError::NotFound(msg)
            | ApiError::Internal(msg) => json!({ "message": msg }),
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn validation_failed(messages: Vec<String>) -> Self {
        ApiError::ValidationFailed(messages)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn invalid_token(message: impl Into<String>) -> Self {
        ApiError::InvalidToken(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

impl From<crate::database::store::StoreError> for ApiError {
    fn from(err: crate::database::store::StoreError) -> Self {
        // Log the real error but return a generic message
        tracing::error!("Store error: {}", err);
        ApiError::internal("An error occurred while processing your request")
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::ValidationFailed(messages) => write!(f, "{}", messages.join(", ")),
            ApiError::Unauthorized(msg)
            | ApiError::InvalidToken(msg)
            | ApiError::NotFound(msg)
            | ApiError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_kinds_to_status_codes() {
        assert_eq!(ApiError::validation_failed(vec![]).status_code(), 400);
        assert_eq!(ApiError::unauthorized("Unauthorized").status_code(), 401);
        assert_eq!(ApiError::invalid_token("Invalid token").status_code(), 401);
        assert_eq!(ApiError::not_found("Data not found").status_code(), 404);
        assert_eq!(ApiError::internal("boom").status_code(), 500);
    }

    #[test]
    fn validation_body_is_a_message_array() {
        let err = ApiError::validation_failed(vec![
            "Title cannot be omitted".to_string(),
            "Image URL cannot be omitted".to_string(),
        ]);
        assert_eq!(
            err.to_json(),
            serde_json::json!({
                "message": ["Title cannot be omitted", "Image URL cannot be omitted"]
            })
        );
    }

    #[test]
    fn other_bodies_are_a_single_message() {
        let err = ApiError::not_found("Data not found");
        assert_eq!(err.to_json(), serde_json::json!({ "message": "Data not found" }));
    }
}
