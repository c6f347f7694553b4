#![forbid(unsafe_code)]
//! Read-only content repository.
//!
//! The dataset is loaded exactly once at startup, validated as a whole and
//! then shared behind `Arc<dyn ContentStore>`. Nothing in this crate ever
//! mutates a record after load.

use batterytech_model::{BatteryRecord, QuizQuestion, QuizUnit, TimelineEvent};

mod content;
mod embedded;
mod error;
mod validate;

pub use content::{StaticContent, BATTERIES_FILE, QUIZZES_FILE, TIMELINE_FILE, UNITS_FILE};
pub use error::{StoreError, StoreErrorCode};
pub use validate::validate_content;

pub const CRATE_NAME: &str = "batterytech-store";

/// Repository seam between the query layer and wherever the content lives.
pub trait ContentStore: Send + Sync {
    fn batteries(&self) -> &[BatteryRecord];
    fn quiz_questions(&self) -> &[QuizQuestion];
    fn quiz_units(&self) -> &[QuizUnit];
    fn timeline(&self) -> &[TimelineEvent];
}
