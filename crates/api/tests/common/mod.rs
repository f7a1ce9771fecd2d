#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use catchup_api::config::{LogFormat, ServerConfig};
use catchup_api::router::build_app_router;
use catchup_api::state::AppState;
use catchup_core::types::{DbId, Timestamp};
use catchup_db::models::media::{Media, NewMedia, UpdateMediaRequest};
use catchup_db::store::media_not_found;
use catchup_db::{MediaStore, StoreError, StoreResult};

// ---------------------------------------------------------------------------
// Store doubles
// ---------------------------------------------------------------------------

/// In-memory [`MediaStore`] with the same observable contract as the
/// PostgreSQL store: monotonically increasing ids, insertion-ordered listing,
/// idempotent delete.
#[derive(Default)]
pub struct InMemoryMediaStore {
    rows: Mutex<Vec<Media>>,
    last_id: AtomicI64,
}

impl InMemoryMediaStore {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl MediaStore for InMemoryMediaStore {
    async fn create_media(&self, input: &NewMedia) -> StoreResult<Media> {
        let media = Media {
            id: self.last_id.fetch_add(1, Ordering::SeqCst) + 1,
            title: input.title.clone(),
            form: input.form.clone(),
            is_watched: input.is_watched,
            date_watched: input.date_watched,
            created_at: input.created_at,
        };
        self.rows.lock().unwrap().push(media.clone());
        Ok(media)
    }

    async fn get_media_by_id(&self, id: DbId) -> StoreResult<Media> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| media_not_found(id))
    }

    async fn get_medias(&self) -> StoreResult<Vec<Media>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn update_media(
        &self,
        id: DbId,
        input: &UpdateMediaRequest,
        now: Timestamp,
    ) -> StoreResult<Media> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| media_not_found(id))?;
        *row = row.with_update(input, now);
        Ok(row.clone())
    }

    async fn delete_media(&self, id: DbId) -> StoreResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|m| m.id != id);
        Ok(rows.len() < before)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}

/// A store whose backing database is unreachable: every call fails.
pub struct UnavailableStore;

fn unavailable() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl MediaStore for UnavailableStore {
    async fn create_media(&self, _input: &NewMedia) -> StoreResult<Media> {
        Err(unavailable())
    }

    async fn get_media_by_id(&self, _id: DbId) -> StoreResult<Media> {
        Err(unavailable())
    }

    async fn get_medias(&self) -> StoreResult<Vec<Media>> {
        Err(unavailable())
    }

    async fn update_media(
        &self,
        _id: DbId,
        _input: &UpdateMediaRequest,
        _now: Timestamp,
    ) -> StoreResult<Media> {
        Err(unavailable())
    }

    async fn delete_media(&self, _id: DbId) -> StoreResult<bool> {
        Err(unavailable())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Err(unavailable())
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        log_format: LogFormat::Text,
    }
}

/// Build the full application router (same middleware stack as production)
/// over the given store.
pub fn build_test_app(store: Arc<dyn MediaStore>) -> Router {
    let config = test_config();
    let state = AppState::new(store, config.clone());
    build_app_router(state, &config)
}

/// Build an app over a fresh in-memory store, returning both.
pub fn in_memory_app() -> (Router, Arc<InMemoryMediaStore>) {
    let store = Arc::new(InMemoryMediaStore::default());
    (build_test_app(store.clone()), store)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json)
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body.to_string())).await
}

/// Read the full response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
