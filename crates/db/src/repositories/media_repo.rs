//! Repository for the `media` table.
//!
//! Every function is a single statement against the pool; nothing here opens
//! a transaction.

use catchup_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::media::{Media, NewMedia, UpdateMediaRequest};

/// Column list for `media` queries.
const COLUMNS: &str = "id, title, form, is_watched, date_watched, created_at";

/// Provides data access for media items.
pub struct MediaRepo;

impl MediaRepo {
    /// Insert a new media row, returning it with its generated `id`.
    pub async fn create(pool: &PgPool, input: &NewMedia) -> Result<Media, sqlx::Error> {
        let query = format!(
            "INSERT INTO media (title, form, is_watched, date_watched, created_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(&input.title)
            .bind(&input.form)
            .bind(input.is_watched)
            .bind(input.date_watched)
            .bind(input.created_at)
            .fetch_one(pool)
            .await
    }

    /// Find a media row by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Media>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media WHERE id = $1");
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all media rows in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Media>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media ORDER BY id");
        sqlx::query_as::<_, Media>(&query).fetch_all(pool).await
    }

    /// Apply an update request to the row with `id` in one statement.
    ///
    /// `created_at` is never written. `date_watched` is derived from the
    /// row's current value by the rule in
    /// [`resolve_date_watched`](catchup_core::watch::resolve_date_watched),
    /// with `now` as the stamp. Returns `None` if no row matches.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateMediaRequest,
        now: Timestamp,
    ) -> Result<Option<Media>, sqlx::Error> {
        let query = format!(
            "UPDATE media SET \
                 title = $2, \
                 form = $3, \
                 is_watched = $4, \
                 date_watched = CASE WHEN $4 THEN COALESCE(date_watched, $5) ELSE NULL END \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.form)
            .bind(dto.is_watched)
            .bind(now)
            .fetch_optional(pool)
            .await
    }

    /// Delete a media row by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
