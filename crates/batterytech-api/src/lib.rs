#![forbid(unsafe_code)]
//! Transport-neutral pieces of the BatteryTech HTTP API: the route table,
//! the error contract and parsing of path/query parameters. Nothing here
//! touches sockets; the server crate wires these into axum.

pub mod error_mapping;
mod errors;
mod params;
mod responses;

pub use errors::{ApiError, ApiErrorCode};
pub use params::{parse_battery_type, parse_compare_ids, parse_quiz_unit, MAX_COMPARE_IDS};
pub use responses::HealthResponse;

pub const CRATE_NAME: &str = "batterytech-api";

pub const ROUTE_HEALTH: &str = "/health";
pub const ROUTE_BATTERIES: &str = "/api/batteries";
pub const ROUTE_BATTERY: &str = "/api/batteries/:id";
pub const ROUTE_COMPARE: &str = "/api/compare";
pub const ROUTE_QUIZ: &str = "/api/quiz/:unit";
pub const ROUTE_UNITS: &str = "/api/units";
pub const ROUTE_TIMELINE: &str = "/api/timeline";

/// Paths under this prefix are rate limited.
pub const API_PREFIX: &str = "/api/";

#[must_use]
pub fn route_table() -> [&'static str; 7] {
    [
        ROUTE_HEALTH,
        ROUTE_BATTERIES,
        ROUTE_BATTERY,
        ROUTE_COMPARE,
        ROUTE_QUIZ,
        ROUTE_UNITS,
        ROUTE_TIMELINE,
    ]
}
