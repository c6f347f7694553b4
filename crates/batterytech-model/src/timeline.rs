// SPDX-License-Identifier: Apache-2.0

use crate::ids::TimelineKey;
use crate::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineEvent {
    pub key: TimelineKey,
    pub year: i32,
    pub title: String,
    pub description: String,
    pub image: String,
}

impl TimelineEvent {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.key.validate()?;
        require_text(self.key.as_str(), "title", &self.title)?;
        require_text(self.key.as_str(), "description", &self.description)
    }
}
