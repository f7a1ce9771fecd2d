//! Request-level middleware that runs outside the route table.
//!
//! - [`reject_plain_options`] -- Answers `OPTIONS` requests that are not CORS
//!   preflights with the uniform 405 envelope.

use axum::extract::Request;
use axum::http::header::{ACCESS_CONTROL_REQUEST_METHOD, ORIGIN};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Let CORS preflights through and reject every other `OPTIONS` request.
///
/// The CORS layer answers any `OPTIONS` request on its own, so without this
/// a plain `OPTIONS /medias` would get an empty 200. A preflight is an
/// `OPTIONS` carrying both `Origin` and `Access-Control-Request-Method`.
pub async fn reject_plain_options(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS && !is_preflight(&request) {
        return AppError::MethodNotAllowed(Method::OPTIONS).into_response();
    }
    next.run(request).await
}

fn is_preflight(request: &Request) -> bool {
    let headers = request.headers();
    headers.contains_key(ORIGIN) && headers.contains_key(ACCESS_CONTROL_REQUEST_METHOD)
}
