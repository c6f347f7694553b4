// SPDX-License-Identifier: Apache-2.0

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueryErrorCode {
    NotFound,
    InvalidArgument,
}

/// What went wrong, and on which kind of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueryTarget {
    Battery,
    BatteryIds,
    QuizUnit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    pub code: QueryErrorCode,
    pub target: QueryTarget,
    pub message: String,
}

impl QueryError {
    #[must_use]
    pub fn new(code: QueryErrorCode, target: QueryTarget, message: impl Into<String>) -> Self {
        Self {
            code,
            target,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn battery_not_found(id: &str) -> Self {
        Self::new(
            QueryErrorCode::NotFound,
            QueryTarget::Battery,
            format!("battery not found: {id}"),
        )
    }

    #[must_use]
    pub fn missing_battery_ids() -> Self {
        Self::new(
            QueryErrorCode::InvalidArgument,
            QueryTarget::BatteryIds,
            "battery ids are required",
        )
    }

    #[must_use]
    pub fn quiz_not_found(unit: u32) -> Self {
        Self::new(
            QueryErrorCode::NotFound,
            QueryTarget::QuizUnit,
            format!("no quiz questions for unit {unit}"),
        )
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for QueryError {}
