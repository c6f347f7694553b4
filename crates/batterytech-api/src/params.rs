use crate::errors::ApiError;
use batterytech_model::BatteryType;
use std::collections::{BTreeMap, BTreeSet};

pub const MAX_COMPARE_IDS: usize = 3;

/// Reads `ids` from the query string: comma separated, trimmed, blanks
/// dropped, repeats collapsed in first-seen order.
pub fn parse_compare_ids(query: &BTreeMap<String, String>) -> Result<Vec<String>, ApiError> {
    let raw = query
        .get("ids")
        .ok_or_else(ApiError::missing_battery_ids)?;
    let mut seen = BTreeSet::new();
    let ids: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty() && seen.insert(*id))
        .map(str::to_string)
        .collect();
    if ids.is_empty() {
        return Err(ApiError::missing_battery_ids());
    }
    if ids.len() > MAX_COMPARE_IDS {
        return Err(ApiError::too_many_battery_ids());
    }
    Ok(ids)
}

/// Unit path segment: ascii digits only. `0` parses and is left for the
/// lookup to reject as not found.
pub fn parse_quiz_unit(raw: &str) -> Result<u32, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::invalid_quiz_unit());
    }
    raw.parse::<u32>()
        .map_err(|_| ApiError::invalid_quiz_unit())
}

/// Optional `type` filter for the battery listing. Absent, blank or `all`
/// means no filter.
pub fn parse_battery_type(
    query: &BTreeMap<String, String>,
) -> Result<Option<BatteryType>, ApiError> {
    let Some(raw) = query.get("type").map(|v| v.trim()) else {
        return Ok(None);
    };
    if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    BatteryType::from_slug(raw)
        .map(Some)
        .ok_or_else(ApiError::invalid_battery_type)
}
