// SPDX-License-Identifier: Apache-2.0

use batterytech_model::ValidationError;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorCode {
    Io,
    Decode,
    Validation,
    Duplicate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreError {
    pub code: StoreErrorCode,
    pub message: String,
}

impl StoreError {
    #[must_use]
    pub fn new(code: StoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub(crate) fn io(source: &str, err: &std::io::Error) -> Self {
        Self::new(StoreErrorCode::Io, format!("{source}: {err}"))
    }

    pub(crate) fn decode(source: &str, err: &serde_json::Error) -> Self {
        Self::new(StoreErrorCode::Decode, format!("{source}: {err}"))
    }

    pub(crate) fn duplicate(kind: &str, id: &str) -> Self {
        Self::new(
            StoreErrorCode::Duplicate,
            format!("duplicate {kind} identifier: {id}"),
        )
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for StoreError {}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::new(StoreErrorCode::Validation, value.to_string())
    }
}
