use async_trait::async_trait;
use thiserror::Error;

use super::models::{NewPhoto, Photo, PhotoWithOwner, User};

/// Errors from the backing store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// The relational store as seen by the handlers and the authentication gate:
/// primary-key lookups, one bulk read, one insert, one find-with-join.
#[async_trait]
pub trait Store: Send + Sync {
    /// Connectivity probe for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Look up a user by primary key. `None` means no such user.
    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError>;

    /// All photos in store order, owner not expanded.
    async fn list_photos(&self) -> Result<Vec<Photo>, StoreError>;

    /// One photo by primary key with the owning user's public fields.
    async fn find_photo_with_owner(&self, id: i64) -> Result<Option<PhotoWithOwner>, StoreError>;

    /// Persist a validated photo and return it with store-assigned fields.
    async fn insert_photo(&self, photo: NewPhoto) -> Result<Photo, StoreError>;
}
