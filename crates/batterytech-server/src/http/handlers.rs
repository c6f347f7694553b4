// SPDX-License-Identifier: Apache-2.0

use crate::http::response_contract::api_error_response;
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use batterytech_api::{
    parse_battery_type, parse_compare_ids, parse_quiz_unit, ApiError, HealthResponse,
};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

pub(crate) async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

pub(crate) async fn batteries_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let query: BTreeMap<String, String> = params.into_iter().collect();
    match parse_battery_type(&query) {
        Ok(None) => Json(state.query.get_all_batteries()).into_response(),
        Ok(Some(battery_type)) => {
            Json(state.query.get_batteries_by_type(battery_type)).into_response()
        }
        Err(err) => api_error_response(err),
    }
}

pub(crate) async fn battery_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.query.get_battery_by_id(&id) {
        Ok(record) => Json(record).into_response(),
        Err(err) => {
            debug!(battery_id = %id, "battery lookup missed");
            api_error_response(err.into())
        }
    }
}

pub(crate) async fn compare_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let query: BTreeMap<String, String> = params.into_iter().collect();
    let ids = match parse_compare_ids(&query) {
        Ok(ids) => ids,
        Err(err) => return api_error_response(err),
    };
    match state.query.get_batteries_by_ids(ids.as_slice()) {
        Ok(records) => Json(records).into_response(),
        Err(err) => api_error_response(err.into()),
    }
}

pub(crate) async fn quiz_handler(
    State(state): State<AppState>,
    Path(raw_unit): Path<String>,
) -> Response {
    let unit = match parse_quiz_unit(&raw_unit) {
        Ok(unit) => unit,
        Err(err) => return api_error_response(err),
    };
    let sampled = state
        .quiz_rng
        .with_rng(|rng| state.query.get_quiz_by_unit(unit, rng));
    match sampled {
        Ok(questions) => Json(questions).into_response(),
        Err(err) => api_error_response(err.into()),
    }
}

pub(crate) async fn units_handler(State(state): State<AppState>) -> Response {
    Json(state.query.get_quiz_units()).into_response()
}

pub(crate) async fn timeline_handler(State(state): State<AppState>) -> Response {
    Json(state.query.get_timeline()).into_response()
}

pub(crate) async fn fallback_handler() -> Response {
    api_error_response(ApiError::route_not_found())
}
