use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use crate::database::models::{Photo, PhotoInput, PhotoWithOwner};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::AppState;

/// GET /photos - all photos in store order, owner not expanded
pub async fn photos_get(State(state): State<AppState>) -> Result<Json<Vec<Photo>>, ApiError> {
    let photos = state.store.list_photos().await?;
    Ok(Json(photos))
}

/// GET /photos/:id - one photo with the owning user's public fields
pub async fn photo_get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PhotoWithOwner>, ApiError> {
    let photo = state
        .store
        .find_photo_with_owner(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Data not found"))?;

    Ok(Json(photo))
}

/// POST /photos - validate, stamp the authenticated owner, persist
pub async fn photos_post(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(input): Json<PhotoInput>,
) -> Result<(StatusCode, Json<Photo>), ApiError> {
    let new_photo = input
        .validate(auth_user.id)
        .map_err(ApiError::validation_failed)?;

    let created = state.store.insert_photo(new_photo).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
