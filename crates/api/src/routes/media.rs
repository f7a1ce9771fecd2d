//! Route definitions for the media resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Media routes, mounted at the root.
///
/// ```text
/// GET    /medias          -> list_medias
/// POST   /medias          -> create_media
/// GET    /medias/{id}     -> get_media
/// PUT    /medias/{id}     -> update_media
/// DELETE /medias/{id}     -> delete_media
/// HEAD   (both paths)     -> method_not_allowed
/// *      (other methods)  -> method_not_allowed
/// ```
///
/// `HEAD` is routed explicitly so it does not fall through to the `GET`
/// handlers. Plain `OPTIONS` is rejected by
/// [`reject_plain_options`](crate::middleware::reject_plain_options).
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/medias",
            get(media::list_medias)
                .post(media::create_media)
                .head(media::method_not_allowed)
                .fallback(media::method_not_allowed),
        )
        .route(
            "/medias/{id}",
            get(media::get_media)
                .put(media::update_media)
                .delete(media::delete_media)
                .head(media::method_not_allowed)
                .fallback(media::method_not_allowed),
        )
}
