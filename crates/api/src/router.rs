//! Assembles the media service: health and media routes behind one
//! middleware stack.
//!
//! `main.rs` serves the result of [`build_app_router`]; the integration tests
//! drive the same function with a test store.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::middleware::from_fn;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::middleware::reject_plain_options;
use crate::routes;
use crate::state::AppState;

/// Build the media service [`Router`] over `state`.
///
/// Outermost first, a request passes through:
///
/// 1. `x-request-id` assignment, then a tracing span, then echo of the id
///    on the response
/// 2. 405 for `OPTIONS` requests that are not CORS preflights
/// 3. CORS for the configured origins (answers preflights)
/// 4. the request timeout (408)
/// 5. panic recovery (500)
///
/// Requests that match no route get axum's empty 404.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::media::router())
        // Each layer wraps the ones above it.
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(build_cors_layer(config))
        .layer(from_fn(reject_plain_options))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}

/// CORS for browser clients on `config.cors_origins`: the four media verbs
/// and a JSON `Content-Type`, with preflights cached for an hour.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(config.cors_origins.clone())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
