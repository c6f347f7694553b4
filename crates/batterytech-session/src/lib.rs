#![forbid(unsafe_code)]
//! Client-side state holders.
//!
//! [`QuizSession`] walks a unit's questions from the start screen to the
//! result summary. [`ComparisonSelection`] keeps up to three batteries side
//! by side and derives the table rows and chart data shown for them.
//! Both are plain single-owner values mutated through `&mut self`.

mod comparison;
mod error;
mod quiz_session;

pub use comparison::{
    ApplicationsColumn, ChartDatum, ChartSeries, ComparisonCell, ComparisonChart, ComparisonMetric,
    ComparisonRow, ComparisonSelection, ProsConsColumn, SLOT_COUNT,
};
pub use error::SessionError;
pub use quiz_session::{
    Feedback, QuestionRound, QuizOutcome, QuizSession, QuizState, SessionPhase,
};

pub const CRATE_NAME: &str = "batterytech-session";
