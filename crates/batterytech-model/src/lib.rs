#![forbid(unsafe_code)]
//! Content model for BatteryTech Explorer.
//!
//! Every record here is created once when the content store loads and is
//! never mutated afterwards. Field names on the wire are camelCase so the
//! JSON payloads keep the shape the web client already consumes.

mod battery;
mod ids;
mod quiz;
mod timeline;
mod validation;

pub use battery::{
    BatteryRecord, BatteryType, Chemistry, Performance, TemperatureRange,
};
pub use ids::{BatteryId, ParseError, QuestionId, TimelineKey, ID_MAX_LEN};
pub use quiz::{QuizQuestion, QuizUnit, OPTION_COUNT};
pub use timeline::TimelineEvent;
pub use validation::ValidationError;

pub const CRATE_NAME: &str = "batterytech-model";
