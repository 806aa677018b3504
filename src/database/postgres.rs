use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool, Row};
use std::time::Duration;

use crate::config;

use super::models::{NewPhoto, Photo, PhotoWithOwner, PublicUser, User};
use super::store::{Store, StoreError};

/// Connect a pool using DATABASE_URL and the configured pool limits.
pub async fn connect() -> Result<PgPool, StoreError> {
    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| StoreError::ConfigMissing("DATABASE_URL"))?;

    let settings = &config::config().database;
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.connection_timeout))
        .connect(&database_url)
        .await?;

    tracing::info!("Created database pool");
    Ok(pool)
}

/// Postgres-backed store over the `users` and `photos` tables.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password, created_at, updated_at
             FROM users
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn list_photos(&self) -> Result<Vec<Photo>, StoreError> {
        let photos = sqlx::query_as::<_, Photo>(
            "SELECT id, title, caption, image_url, user_id, created_at, updated_at
             FROM photos
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(photos)
    }

    async fn find_photo_with_owner(&self, id: i64) -> Result<Option<PhotoWithOwner>, StoreError> {
        let row = sqlx::query(
            "SELECT p.id, p.title, p.caption, p.image_url, p.created_at, p.updated_at,
                    u.id AS owner_id, u.username, u.email
             FROM photos p
             JOIN users u ON u.id = p.user_id
             WHERE p.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| PhotoWithOwner {
            id: row.get("id"),
            title: row.get("title"),
            caption: row.get("caption"),
            image_url: row.get("image_url"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
            user: PublicUser {
                id: row.get("owner_id"),
                username: row.get("username"),
                email: row.get("email"),
            },
        }))
    }

    async fn insert_photo(&self, photo: NewPhoto) -> Result<Photo, StoreError> {
        let created = sqlx::query_as::<_, Photo>(
            "INSERT INTO photos (title, caption, image_url, user_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id, title, caption, image_url, user_id, created_at, updated_at",
        )
        .bind(&photo.title)
        .bind(&photo.caption)
        .bind(&photo.image_url)
        .bind(photo.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
