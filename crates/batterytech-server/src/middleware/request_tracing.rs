// SPDX-License-Identifier: Apache-2.0

use crate::http::request_tracing::request_id;
use crate::http::response_contract::api_error_response;
use crate::AppState;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use batterytech_api::ApiError;
use std::time::Instant;
use tracing::{error, info, Instrument};

/// Outermost layer: tags the request, times it and turns a handler panic
/// into a 500 so the connection still gets an answer.
pub(crate) async fn request_tracing_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let route = request.uri().path().to_string();
    let request_id = request_id(request.headers(), &state);

    let span = tracing::info_span!(
        "http.request",
        request_id = %request_id,
        method = %method,
        route = %route,
    );

    let started = Instant::now();
    let mut response = match tokio::spawn(next.run(request).instrument(span.clone())).await {
        Ok(response) => response,
        Err(err) => {
            span.in_scope(|| {
                error!(panicked = err.is_panic(), "request handler aborted");
                api_error_response(ApiError::internal())
            })
        }
    };

    span.in_scope(|| {
        info!(
            status = response.status().as_u16(),
            latency_ms = started.elapsed().as_millis() as u64,
            "request completed"
        );
    });
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}
