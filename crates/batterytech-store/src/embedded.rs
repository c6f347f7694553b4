// SPDX-License-Identifier: Apache-2.0

pub(crate) const BATTERIES_JSON: &str = include_str!("../data/batteries.json");
pub(crate) const QUIZZES_JSON: &str = include_str!("../data/quizzes.json");
pub(crate) const UNITS_JSON: &str = include_str!("../data/units.json");
pub(crate) const TIMELINE_JSON: &str = include_str!("../data/timeline.json");
