// SPDX-License-Identifier: Apache-2.0

use crate::ParseError;
use std::fmt::{Display, Formatter};

/// A record that deserialized fine but breaks a content invariant.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ValidationError {
    Identifier(ParseError),
    EmptyField { record: String, field: &'static str },
    NegativeMetric { record: String, field: &'static str, value: f64 },
    NonFiniteMetric { record: String, field: &'static str },
    TemperatureRange { record: String, min: f64, max: f64 },
    OptionCount { record: String, expected: usize, found: usize },
    CorrectAnswerOutOfRange { record: String, index: usize },
    NonPositiveUnit { record: String },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(err) => write!(f, "{err}"),
            Self::EmptyField { record, field } => write!(f, "{record}: {field} must not be empty"),
            Self::NegativeMetric {
                record,
                field,
                value,
            } => write!(f, "{record}: {field} must be non-negative, got {value}"),
            Self::NonFiniteMetric { record, field } => {
                write!(f, "{record}: {field} must be a finite number")
            }
            Self::TemperatureRange { record, min, max } => write!(
                f,
                "{record}: operating temperature min {min} exceeds max {max}"
            ),
            Self::OptionCount {
                record,
                expected,
                found,
            } => write!(f, "{record}: expected {expected} options, found {found}"),
            Self::CorrectAnswerOutOfRange { record, index } => {
                write!(f, "{record}: correct answer index {index} is out of range")
            }
            Self::NonPositiveUnit { record } => write!(f, "{record}: unit must be positive"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ParseError> for ValidationError {
    fn from(value: ParseError) -> Self {
        Self::Identifier(value)
    }
}

pub(crate) fn require_text(
    record: &str,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            record: record.to_string(),
            field,
        });
    }
    Ok(())
}
