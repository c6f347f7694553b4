// SPDX-License-Identifier: Apache-2.0

use crate::{ContentStore, StoreError, StoreErrorCode};
use std::collections::BTreeSet;

/// Dataset-wide checks on top of the per-record invariants.
pub fn validate_content(store: &dyn ContentStore) -> Result<(), StoreError> {
    let mut battery_ids = BTreeSet::new();
    for battery in store.batteries() {
        battery.validate()?;
        if !battery_ids.insert(battery.id.as_str()) {
            return Err(StoreError::duplicate("battery", battery.id.as_str()));
        }
    }

    let mut unit_numbers = BTreeSet::new();
    for unit in store.quiz_units() {
        unit.validate()?;
        if !unit_numbers.insert(unit.unit) {
            return Err(StoreError::duplicate("quiz unit", &unit.unit.to_string()));
        }
    }

    let mut question_ids = BTreeSet::new();
    for question in store.quiz_questions() {
        question.validate()?;
        if !question_ids.insert(question.id.as_str()) {
            return Err(StoreError::duplicate("quiz question", question.id.as_str()));
        }
        if !unit_numbers.contains(&question.unit) {
            return Err(StoreError::new(
                StoreErrorCode::Validation,
                format!(
                    "{}: unit {} has no quiz unit entry",
                    question.id, question.unit
                ),
            ));
        }
    }

    let mut timeline_keys = BTreeSet::new();
    let mut last_year = i32::MIN;
    for event in store.timeline() {
        event.validate()?;
        if !timeline_keys.insert(event.key.as_str()) {
            return Err(StoreError::duplicate("timeline", event.key.as_str()));
        }
        if event.year < last_year {
            return Err(StoreError::new(
                StoreErrorCode::Validation,
                format!("{}: timeline events must be ordered by year", event.key),
            ));
        }
        last_year = event.year;
    }

    Ok(())
}
