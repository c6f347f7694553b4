// SPDX-License-Identifier: Apache-2.0

use crate::http::response_contract::api_error_response;
use crate::AppState;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use batterytech_api::ApiError;
use tracing::warn;

fn origin_header(request: &Request<Body>) -> Option<String> {
    let raw = request.headers().get("origin")?.to_str().ok()?.trim();
    if raw.is_empty() || raw.len() > 256 {
        return None;
    }
    Some(raw.to_string())
}

fn allow_origin(response: &mut Response, origin: &str) {
    if let Ok(v) = HeaderValue::from_str(origin) {
        response
            .headers_mut()
            .insert("access-control-allow-origin", v);
    }
    response
        .headers_mut()
        .insert("vary", HeaderValue::from_static("Origin"));
}

/// Requests without `Origin` pass untouched; listed origins are echoed back;
/// anything else is refused before reaching a handler.
pub(crate) async fn cors_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let origin = origin_header(&req);
    let allowed = origin.as_ref().map(|value| {
        state
            .api
            .cors_allowed_origins
            .iter()
            .any(|x| x == value)
    });

    if allowed == Some(false) {
        warn!(origin = origin.as_deref().unwrap_or(""), "cross-origin request refused");
        return api_error_response(ApiError::origin_not_allowed());
    }

    if req.method() == Method::OPTIONS {
        let mut resp = StatusCode::NO_CONTENT.into_response();
        if let Some(origin_value) = origin.as_deref() {
            allow_origin(&mut resp, origin_value);
            resp.headers_mut().insert(
                "access-control-allow-methods",
                HeaderValue::from_static("GET,OPTIONS"),
            );
            resp.headers_mut().insert(
                "access-control-allow-headers",
                HeaderValue::from_static("content-type,x-request-id"),
            );
        }
        return resp;
    }

    let mut resp = next.run(req).await;
    if let Some(origin_value) = origin.as_deref() {
        allow_origin(&mut resp, origin_value);
    }
    resp
}
