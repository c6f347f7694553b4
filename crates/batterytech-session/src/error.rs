// SPDX-License-Identifier: Apache-2.0

use crate::quiz_session::SessionPhase;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    InvalidTransition {
        operation: &'static str,
        phase: SessionPhase,
    },
    EmptyQuestionList {
        unit: u32,
    },
    QuestionFromOtherUnit {
        unit: u32,
        question: String,
        question_unit: u32,
    },
    OptionOutOfRange {
        index: usize,
        options: usize,
    },
    SlotOutOfRange {
        slot: usize,
    },
    AlreadySelected {
        id: String,
        slot: usize,
    },
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTransition { operation, phase } => {
                write!(f, "{operation} is not allowed in the {phase} state")
            }
            Self::EmptyQuestionList { unit } => {
                write!(f, "unit {unit} has no questions to ask")
            }
            Self::QuestionFromOtherUnit {
                unit,
                question,
                question_unit,
            } => write!(
                f,
                "question {question} belongs to unit {question_unit}, not unit {unit}"
            ),
            Self::OptionOutOfRange { index, options } => {
                write!(f, "option {index} is out of range for {options} options")
            }
            Self::SlotOutOfRange { slot } => {
                write!(f, "comparison slot {slot} does not exist")
            }
            Self::AlreadySelected { id, slot } => {
                write!(f, "battery {id} is already selected in slot {slot}")
            }
        }
    }
}

impl std::error::Error for SessionError {}
