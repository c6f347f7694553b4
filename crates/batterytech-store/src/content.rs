// SPDX-License-Identifier: Apache-2.0

use crate::embedded::{BATTERIES_JSON, QUIZZES_JSON, TIMELINE_JSON, UNITS_JSON};
use crate::{validate_content, ContentStore, StoreError};
use batterytech_model::{BatteryRecord, QuizQuestion, QuizUnit, TimelineEvent};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::info;

pub const BATTERIES_FILE: &str = "batteries.json";
pub const QUIZZES_FILE: &str = "quizzes.json";
pub const UNITS_FILE: &str = "units.json";
pub const TIMELINE_FILE: &str = "timeline.json";

/// In-memory content, validated on construction.
#[derive(Debug, Clone)]
pub struct StaticContent {
    batteries: Vec<BatteryRecord>,
    questions: Vec<QuizQuestion>,
    units: Vec<QuizUnit>,
    timeline: Vec<TimelineEvent>,
}

impl StaticContent {
    pub fn from_parts(
        batteries: Vec<BatteryRecord>,
        questions: Vec<QuizQuestion>,
        units: Vec<QuizUnit>,
        timeline: Vec<TimelineEvent>,
    ) -> Result<Self, StoreError> {
        let content = Self {
            batteries,
            questions,
            units,
            timeline,
        };
        validate_content(&content)?;
        Ok(content)
    }

    /// The dataset compiled into the binary.
    pub fn embedded() -> Result<Self, StoreError> {
        let content = Self::from_parts(
            decode(BATTERIES_FILE, BATTERIES_JSON)?,
            decode(QUIZZES_FILE, QUIZZES_JSON)?,
            decode(UNITS_FILE, UNITS_JSON)?,
            decode(TIMELINE_FILE, TIMELINE_JSON)?,
        )?;
        content.log_loaded("embedded");
        Ok(content)
    }

    /// Reads the four content files from `dir`. All of them must be present.
    pub fn load_dir(dir: &Path) -> Result<Self, StoreError> {
        let content = Self::from_parts(
            read_json(dir, BATTERIES_FILE)?,
            read_json(dir, QUIZZES_FILE)?,
            read_json(dir, UNITS_FILE)?,
            read_json(dir, TIMELINE_FILE)?,
        )?;
        content.log_loaded(&dir.display().to_string());
        Ok(content)
    }

    fn log_loaded(&self, source: &str) {
        info!(
            source = %source,
            batteries = self.batteries.len(),
            quiz_questions = self.questions.len(),
            quiz_units = self.units.len(),
            timeline_events = self.timeline.len(),
            "content store loaded"
        );
    }
}

impl ContentStore for StaticContent {
    fn batteries(&self) -> &[BatteryRecord] {
        &self.batteries
    }

    fn quiz_questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    fn quiz_units(&self) -> &[QuizUnit] {
        &self.units
    }

    fn timeline(&self) -> &[TimelineEvent] {
        &self.timeline
    }
}

fn decode<T: DeserializeOwned>(source: &str, raw: &str) -> Result<T, StoreError> {
    serde_json::from_str(raw).map_err(|e| StoreError::decode(source, &e))
}

fn read_json<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<T, StoreError> {
    let path = dir.join(file);
    let source = path.display().to_string();
    let raw = fs::read_to_string(&path).map_err(|e| StoreError::io(&source, &e))?;
    decode(&source, &raw)
}
