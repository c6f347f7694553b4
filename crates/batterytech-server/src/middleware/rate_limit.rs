// SPDX-License-Identifier: Apache-2.0

use crate::http::request_tracing::client_key;
use crate::http::response_contract::api_error_response;
use crate::telemetry::rate_limiter::RateDecision;
use crate::AppState;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use batterytech_api::{ApiError, API_PREFIX};
use tracing::warn;

fn ceil_secs(decision: &RateDecision) -> u64 {
    let d = decision.reset_after;
    d.as_secs() + u64::from(d.subsec_nanos() > 0)
}

fn insert_rate_headers(headers: &mut HeaderMap, decision: &RateDecision) {
    headers.insert("ratelimit-limit", HeaderValue::from(decision.limit as u64));
    headers.insert(
        "ratelimit-remaining",
        HeaderValue::from(decision.remaining as u64),
    );
    headers.insert("ratelimit-reset", HeaderValue::from(ceil_secs(decision)));
}

/// Only `/api/*` is counted; health checks stay free.
pub(crate) async fn rate_limit_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !req.uri().path().starts_with(API_PREFIX) {
        return next.run(req).await;
    }
    let key = client_key(&req, state.api.trust_proxy);
    let decision = state.limiter.check(&key, &state.api.rate_limit).await;
    if !decision.allowed {
        warn!(client = %key, limit = decision.limit, "rate limit exceeded");
        let mut resp = api_error_response(ApiError::rate_limited());
        insert_rate_headers(resp.headers_mut(), &decision);
        resp.headers_mut()
            .insert("retry-after", HeaderValue::from(ceil_secs(&decision)));
        return resp;
    }
    let mut resp = next.run(req).await;
    insert_rate_headers(resp.headers_mut(), &decision);
    resp
}
