//! In-memory store used by integration tests in place of Postgres.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::models::{NewPhoto, Photo, PhotoWithOwner, User};
use super::store::{Store, StoreError};

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    photos: Vec<Photo>,
}

/// Store over plain vectors with store-assigned ids starting at 1,
/// mirroring a freshly truncated database.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user fixture, as a seed script would out-of-band.
    /// `password` is expected to already be hashed.
    pub async fn seed_user(&self, username: &str, email: &str, password: &str) -> User {
        let mut inner = self.inner.write().await;
        let now = Utc::now();
        let user = User {
            id: inner.users.len() as i64 + 1,
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            created_at: now,
            updated_at: now,
        };
        inner.users.push(user.clone());
        user
    }

    /// Insert a photo fixture with an explicit caption.
    pub async fn seed_photo(
        &self,
        title: &str,
        caption: &str,
        image_url: &str,
        user_id: i64,
    ) -> Photo {
        let mut inner = self.inner.write().await;
        let now = Utc::now();
        let photo = Photo {
            id: inner.photos.len() as i64 + 1,
            title: title.to_string(),
            caption: caption.to_string(),
            image_url: image_url.to_string(),
            user_id,
            created_at: now,
            updated_at: now,
        };
        inner.photos.push(photo.clone());
        photo
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|user| user.id == id).cloned())
    }

    async fn list_photos(&self) -> Result<Vec<Photo>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.photos.clone())
    }

    async fn find_photo_with_owner(&self, id: i64) -> Result<Option<PhotoWithOwner>, StoreError> {
        let inner = self.inner.read().await;
        let photo = match inner.photos.iter().find(|photo| photo.id == id) {
            Some(photo) => photo,
            None => return Ok(None),
        };
        let owner = match inner.users.iter().find(|user| user.id == photo.user_id) {
            Some(owner) => owner,
            None => return Ok(None),
        };

        Ok(Some(PhotoWithOwner {
            id: photo.id,
            title: photo.title.clone(),
            caption: photo.caption.clone(),
            image_url: photo.image_url.clone(),
            created_at: photo.created_at,
            updated_at: photo.updated_at,
            user: owner.public(),
        }))
    }

    async fn insert_photo(&self, photo: NewPhoto) -> Result<Photo, StoreError> {
        let mut inner = self.inner.write().await;
        let now = Utc::now();
        let created = Photo {
            id: inner.photos.len() as i64 + 1,
            title: photo.title,
            caption: photo.caption,
            image_url: photo.image_url,
            user_id: photo.user_id,
            created_at: now,
            updated_at: now,
        };
        inner.photos.push(created.clone());
        Ok(created)
    }
}
