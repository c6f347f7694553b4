// SPDX-License-Identifier: Apache-2.0

use crate::{ApiError, ApiErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiErrorMapping {
    pub status_code: u16,
}

#[must_use]
pub fn map_error(error: &ApiError) -> ApiErrorMapping {
    let status_code = match error.code {
        ApiErrorCode::MissingBatteryIds
        | ApiErrorCode::TooManyBatteryIds
        | ApiErrorCode::InvalidQuizUnit
        | ApiErrorCode::InvalidBatteryType => 400,
        ApiErrorCode::OriginNotAllowed => 403,
        ApiErrorCode::BatteryNotFound | ApiErrorCode::QuizNotFound | ApiErrorCode::RouteNotFound => {
            404
        }
        ApiErrorCode::RateLimited => 429,
        ApiErrorCode::Internal => 500,
    };
    ApiErrorMapping { status_code }
}
