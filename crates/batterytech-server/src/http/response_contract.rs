// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use batterytech_api::error_mapping::map_error;
use batterytech_api::ApiError;
use tracing::{error, info};

#[must_use]
pub(crate) fn api_error_status(err: &ApiError) -> StatusCode {
    StatusCode::from_u16(map_error(err).status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

#[must_use]
pub(crate) fn api_error_response(err: ApiError) -> Response {
    let status = api_error_status(&err);
    if status.is_server_error() {
        error!(code = err.code.as_str(), "request failed");
    } else {
        info!(code = err.code.as_str(), status = status.as_u16(), "request rejected");
    }
    (status, Json(err.body())).into_response()
}
