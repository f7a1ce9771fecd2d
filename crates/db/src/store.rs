//! The storage capability the HTTP layer depends on.
//!
//! Handlers only see [`MediaStore`]; [`PgMediaStore`] is the PostgreSQL
//! implementation and delegates to [`MediaRepo`].

use async_trait::async_trait;
use catchup_core::error::CoreError;
use catchup_core::types::{DbId, Timestamp};

use crate::models::media::{Media, NewMedia, UpdateMediaRequest, MEDIA_ENTITY};
use crate::repositories::MediaRepo;
use crate::DbPool;

/// Errors surfaced by a [`MediaStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A domain-level error (currently only "not found").
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The backing database failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Build the not-found error for a media id.
pub fn media_not_found(id: DbId) -> StoreError {
    StoreError::Core(CoreError::NotFound {
        entity: MEDIA_ENTITY,
        id,
    })
}

/// Persistence contract for media items.
///
/// Each method is one independent round trip to the backing store.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Persist a new item and return it with its assigned id.
    async fn create_media(&self, input: &NewMedia) -> StoreResult<Media>;

    /// Fetch one item. Fails with a not-found error if the id is unknown.
    async fn get_media_by_id(&self, id: DbId) -> StoreResult<Media>;

    /// Fetch all items in insertion order. Empty when nothing is stored.
    async fn get_medias(&self) -> StoreResult<Vec<Media>>;

    /// Overwrite title, form and watched flag of the item with `id` and
    /// return the stored row. `now` stamps `date_watched` when the item
    /// becomes watched.
    async fn update_media(
        &self,
        id: DbId,
        input: &UpdateMediaRequest,
        now: Timestamp,
    ) -> StoreResult<Media>;

    /// Remove an item. Returns whether a row existed; a missing id is not an error.
    async fn delete_media(&self, id: DbId) -> StoreResult<bool>;

    /// Confirm the backing store is reachable.
    async fn health_check(&self) -> StoreResult<()>;
}

/// [`MediaStore`] backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgMediaStore {
    pool: DbPool,
}

impl PgMediaStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl MediaStore for PgMediaStore {
    async fn create_media(&self, input: &NewMedia) -> StoreResult<Media> {
        Ok(MediaRepo::create(&self.pool, input).await?)
    }

    async fn get_media_by_id(&self, id: DbId) -> StoreResult<Media> {
        MediaRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| media_not_found(id))
    }

    async fn get_medias(&self) -> StoreResult<Vec<Media>> {
        Ok(MediaRepo::list(&self.pool).await?)
    }

    async fn update_media(
        &self,
        id: DbId,
        input: &UpdateMediaRequest,
        now: Timestamp,
    ) -> StoreResult<Media> {
        MediaRepo::update(&self.pool, id, input, now)
            .await?
            .ok_or_else(|| media_not_found(id))
    }

    async fn delete_media(&self, id: DbId) -> StoreResult<bool> {
        Ok(MediaRepo::delete(&self.pool, id).await?)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
