// SPDX-License-Identifier: Apache-2.0

use batterytech_query::{QueryError, QueryErrorCode, QueryTarget};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ApiErrorCode {
    BatteryNotFound,
    QuizNotFound,
    MissingBatteryIds,
    TooManyBatteryIds,
    InvalidQuizUnit,
    InvalidBatteryType,
    OriginNotAllowed,
    RateLimited,
    RouteNotFound,
    Internal,
}

impl ApiErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BatteryNotFound => "BATTERY_NOT_FOUND",
            Self::QuizNotFound => "QUIZ_NOT_FOUND",
            Self::MissingBatteryIds => "MISSING_BATTERY_IDS",
            Self::TooManyBatteryIds => "TOO_MANY_BATTERY_IDS",
            Self::InvalidQuizUnit => "INVALID_QUIZ_UNIT",
            Self::InvalidBatteryType => "INVALID_BATTERY_TYPE",
            Self::OriginNotAllowed => "ORIGIN_NOT_ALLOWED",
            Self::RateLimited => "RATE_LIMITED",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::Internal => "INTERNAL",
        }
    }

    /// Client-facing message carried in the response body.
    #[must_use]
    pub const fn public_message(self) -> &'static str {
        match self {
            Self::BatteryNotFound => "Battery not found",
            Self::QuizNotFound => "Quiz not found for this unit",
            Self::MissingBatteryIds => "Battery IDs are required",
            Self::TooManyBatteryIds => "At most 3 batteries can be compared",
            Self::InvalidQuizUnit => "Invalid quiz unit",
            Self::InvalidBatteryType => "Invalid battery type",
            Self::OriginNotAllowed => "Origin not allowed",
            Self::RateLimited => "Too many requests, please try again later.",
            Self::RouteNotFound => "Route not found",
            Self::Internal => "Internal server error",
        }
    }
}

/// Error returned to HTTP clients. Only `message` goes on the wire; `code`
/// selects the status and is logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn from_code(code: ApiErrorCode) -> Self {
        Self::new(code, code.public_message())
    }

    #[must_use]
    pub fn battery_not_found() -> Self {
        Self::from_code(ApiErrorCode::BatteryNotFound)
    }

    #[must_use]
    pub fn quiz_not_found() -> Self {
        Self::from_code(ApiErrorCode::QuizNotFound)
    }

    #[must_use]
    pub fn missing_battery_ids() -> Self {
        Self::from_code(ApiErrorCode::MissingBatteryIds)
    }

    #[must_use]
    pub fn too_many_battery_ids() -> Self {
        Self::from_code(ApiErrorCode::TooManyBatteryIds)
    }

    #[must_use]
    pub fn invalid_quiz_unit() -> Self {
        Self::from_code(ApiErrorCode::InvalidQuizUnit)
    }

    #[must_use]
    pub fn invalid_battery_type() -> Self {
        Self::from_code(ApiErrorCode::InvalidBatteryType)
    }

    #[must_use]
    pub fn origin_not_allowed() -> Self {
        Self::from_code(ApiErrorCode::OriginNotAllowed)
    }

    #[must_use]
    pub fn rate_limited() -> Self {
        Self::from_code(ApiErrorCode::RateLimited)
    }

    #[must_use]
    pub fn route_not_found() -> Self {
        Self::from_code(ApiErrorCode::RouteNotFound)
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::from_code(ApiErrorCode::Internal)
    }

    #[must_use]
    pub fn body(&self) -> Value {
        json!({ "message": self.message })
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match (err.code, err.target) {
            (QueryErrorCode::NotFound, QueryTarget::Battery) => Self::battery_not_found(),
            (QueryErrorCode::NotFound, QueryTarget::QuizUnit) => Self::quiz_not_found(),
            (QueryErrorCode::InvalidArgument, QueryTarget::BatteryIds) => {
                Self::missing_battery_ids()
            }
            _ => Self::internal(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}
