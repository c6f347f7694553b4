// SPDX-License-Identifier: Apache-2.0

use crate::ids::QuestionId;
use crate::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Every question is multiple choice with exactly this many options.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuizQuestion {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
    pub unit: u32,
}

impl QuizQuestion {
    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.id.validate()?;
        let record = self.id.as_str();
        require_text(record, "text", &self.text)?;
        require_text(record, "explanation", &self.explanation)?;
        if self.options.len() != OPTION_COUNT {
            return Err(ValidationError::OptionCount {
                record: record.to_string(),
                expected: OPTION_COUNT,
                found: self.options.len(),
            });
        }
        for option in &self.options {
            require_text(record, "options", option)?;
        }
        if self.correct_answer >= self.options.len() {
            return Err(ValidationError::CorrectAnswerOutOfRange {
                record: record.to_string(),
                index: self.correct_answer,
            });
        }
        if self.unit == 0 {
            return Err(ValidationError::NonPositiveUnit {
                record: record.to_string(),
            });
        }
        Ok(())
    }
}

/// A quiz topic as offered by the unit picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuizUnit {
    pub unit: u32,
    pub title: String,
    pub summary: String,
}

impl QuizUnit {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let record = format!("unit {}", self.unit);
        if self.unit == 0 {
            return Err(ValidationError::NonPositiveUnit { record });
        }
        require_text(&record, "title", &self.title)?;
        require_text(&record, "summary", &self.summary)
    }
}
