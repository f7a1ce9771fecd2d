//! Handlers for the `/medias` resource.
//!
//! Each handler decodes its input, makes one storage call through
//! `AppState::store`, and answers with a JSON body. Failures are returned as
//! [`AppError`] and rendered by its `IntoResponse` impl.

use axum::extract::State;
use axum::http::Method;
use axum::response::IntoResponse;
use axum::Json;
use catchup_db::models::media::{CreateMediaRequest, NewMedia, UpdateMediaRequest};
use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, MediaId};
use crate::response::DeletedResponse;
use crate::state::AppState;

/// GET /medias
///
/// List every media item in insertion order.
pub async fn list_medias(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let medias = state.store.get_medias().await?;

    Ok(Json(medias))
}

/// POST /medias
///
/// Create an unwatched media item stamped with the current time.
pub async fn create_media(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMediaRequest>,
) -> AppResult<impl IntoResponse> {
    let new_media = NewMedia::new(input.title, input.form, Utc::now());
    let media = state.store.create_media(&new_media).await?;

    tracing::info!(
        media_id = media.id,
        title = %media.title,
        form = %media.form,
        "Media created",
    );

    Ok(Json(media))
}

/// GET /medias/{id}
pub async fn get_media(
    State(state): State<AppState>,
    MediaId(media_id): MediaId,
) -> AppResult<impl IntoResponse> {
    let media = state.store.get_media_by_id(media_id).await?;

    Ok(Json(media))
}

/// PUT /medias/{id}
///
/// Overwrite title, form and watched flag. `dateWatched` is stamped when the
/// item becomes watched and cleared when it is unwatched.
pub async fn update_media(
    State(state): State<AppState>,
    MediaId(media_id): MediaId,
    AppJson(input): AppJson<UpdateMediaRequest>,
) -> AppResult<impl IntoResponse> {
    let media = state
        .store
        .update_media(media_id, &input, Utc::now())
        .await?;

    tracing::info!(
        media_id,
        is_watched = media.is_watched,
        "Media updated",
    );

    Ok(Json(media))
}

/// DELETE /medias/{id}
///
/// Deleting an id that does not exist still succeeds.
pub async fn delete_media(
    State(state): State<AppState>,
    MediaId(media_id): MediaId,
) -> AppResult<impl IntoResponse> {
    let removed = state.store.delete_media(media_id).await?;

    if removed {
        tracing::info!(media_id, "Media deleted");
    } else {
        tracing::debug!(media_id, "Delete requested for unknown media");
    }

    Ok(Json(DeletedResponse { deleted: media_id }))
}

/// Fallback for any method the media routes do not map.
pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(method)
}
