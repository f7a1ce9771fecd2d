//! Request extractors that reject with [`AppError`].
//!
//! Axum's stock `Path` and `Json` extractors answer with their own plain-text
//! rejections. These wrappers route those failures through the uniform JSON
//! error envelope instead.

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;
use catchup_core::types::{parse_db_id, DbId};

use crate::error::AppError;

/// JSON request body. Decode failures become [`AppError::Decode`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// The `{id}` path segment of a media route.
///
/// A segment that is not an integer rejects with `CoreError::InvalidId`
/// carrying the literal that was sent.
#[derive(Debug, Clone, Copy)]
pub struct MediaId(pub DbId);

impl<S> FromRequestParts<S> for MediaId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Decode(rejection.body_text()))?;
        Ok(MediaId(parse_db_id(&raw)?))
    }
}
