#![forbid(unsafe_code)]

use batterytech_model::{BatteryRecord, BatteryType, QuizQuestion, QuizUnit, TimelineEvent};
use batterytech_store::ContentStore;
use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

mod query_error;
mod sampling;

pub use query_error::{QueryError, QueryErrorCode, QueryTarget};
pub use sampling::sample_questions;

pub const CRATE_NAME: &str = "batterytech-query";
pub const DEFAULT_QUIZ_SAMPLE_SIZE: usize = 5;

/// Read-only queries over an injected content store.
#[derive(Clone)]
pub struct QueryService {
    store: Arc<dyn ContentStore>,
    quiz_sample_size: usize,
}

impl QueryService {
    #[must_use]
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self {
            store,
            quiz_sample_size: DEFAULT_QUIZ_SAMPLE_SIZE,
        }
    }

    /// A sample size of zero is treated as one.
    #[must_use]
    pub fn with_quiz_sample_size(mut self, sample_size: usize) -> Self {
        self.quiz_sample_size = sample_size.max(1);
        self
    }

    #[must_use]
    pub fn quiz_sample_size(&self) -> usize {
        self.quiz_sample_size
    }

    #[must_use]
    pub fn get_all_batteries(&self) -> &[BatteryRecord] {
        self.store.batteries()
    }

    pub fn get_battery_by_id(&self, id: &str) -> Result<&BatteryRecord, QueryError> {
        self.store
            .batteries()
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| QueryError::battery_not_found(id))
    }

    /// Records of one chemistry family, in store order. An empty list is a
    /// valid answer, not an error.
    #[must_use]
    pub fn get_batteries_by_type(&self, battery_type: BatteryType) -> Vec<&BatteryRecord> {
        self.store
            .batteries()
            .iter()
            .filter(|b| b.battery_type == battery_type)
            .collect()
    }

    /// Records whose id appears in `ids`, in store order. Unknown ids are
    /// skipped; each matching record appears once however often it is named.
    pub fn get_batteries_by_ids<S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> Result<Vec<&BatteryRecord>, QueryError> {
        if ids.is_empty() {
            return Err(QueryError::missing_battery_ids());
        }
        let wanted: HashSet<&str> = ids.iter().map(AsRef::as_ref).collect();
        let found: Vec<&BatteryRecord> = self
            .store
            .batteries()
            .iter()
            .filter(|b| wanted.contains(b.id.as_str()))
            .collect();
        debug!(requested = wanted.len(), matched = found.len(), "battery comparison lookup");
        Ok(found)
    }

    /// Shuffled sample of the unit's questions using the configured sample
    /// size.
    pub fn get_quiz_by_unit<R: Rng + ?Sized>(
        &self,
        unit: u32,
        rng: &mut R,
    ) -> Result<Vec<QuizQuestion>, QueryError> {
        self.get_quiz_by_unit_sized(unit, self.quiz_sample_size, rng)
    }

    pub fn get_quiz_by_unit_sized<R: Rng + ?Sized>(
        &self,
        unit: u32,
        sample_size: usize,
        rng: &mut R,
    ) -> Result<Vec<QuizQuestion>, QueryError> {
        let selected = sample_questions(self.store.quiz_questions(), unit, sample_size, rng);
        if selected.is_empty() {
            return Err(QueryError::quiz_not_found(unit));
        }
        Ok(selected)
    }

    #[must_use]
    pub fn get_quiz_units(&self) -> &[QuizUnit] {
        self.store.quiz_units()
    }

    #[must_use]
    pub fn get_timeline(&self) -> &[TimelineEvent] {
        self.store.timeline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use batterytech_store::StaticContent;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn service() -> QueryService {
        QueryService::new(Arc::new(StaticContent::embedded().expect("embedded")))
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let svc = service();
        assert!(svc.get_battery_by_id("lithium-ion").is_ok());
        let err = svc.get_battery_by_id("Lithium-Ion").expect_err("case mismatch");
        assert_eq!(err.code, QueryErrorCode::NotFound);
        assert_eq!(err.target, QueryTarget::Battery);
    }

    #[test]
    fn comparison_preserves_store_order() {
        let svc = service();
        let found = svc
            .get_batteries_by_ids(&["pem-fuel-cell", "lithium-ion", "lead-acid"])
            .expect("ids");
        let ids: Vec<&str> = found.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["lithium-ion", "lead-acid", "pem-fuel-cell"]);
    }

    #[test]
    fn empty_id_list_is_invalid() {
        let svc = service();
        let none: [&str; 0] = [];
        let err = svc.get_batteries_by_ids(&none).expect_err("empty");
        assert_eq!(err.code, QueryErrorCode::InvalidArgument);
    }

    #[test]
    fn zero_sample_size_is_clamped() {
        let svc = service().with_quiz_sample_size(0);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(svc.get_quiz_by_unit(1, &mut rng).expect("unit 1").len(), 1);
    }
}
