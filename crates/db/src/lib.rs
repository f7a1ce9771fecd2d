use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod store;

pub use store::{MediaStore, PgMediaStore, StoreError, StoreResult};

pub type DbPool = sqlx::PgPool;

/// DDL for the single `media` table. Safe to run on every startup.
const CREATE_MEDIA_TABLE: &str = "\
    CREATE TABLE IF NOT EXISTS media ( \
        id BIGSERIAL PRIMARY KEY, \
        title VARCHAR(255) NOT NULL, \
        form VARCHAR(255) NOT NULL, \
        is_watched BOOLEAN NOT NULL DEFAULT FALSE, \
        date_watched TIMESTAMPTZ, \
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW() \
    )";

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `media` table if it does not exist yet.
///
/// This is a bootstrap step, not a migration system: an existing table is
/// left untouched even if its shape differs.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_MEDIA_TABLE).execute(pool).await?;
    tracing::debug!("media table ensured");
    Ok(())
}
