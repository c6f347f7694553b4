use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Mutex, PoisonError};

/// Shared quiz shuffler. Seeded runs replay the same question orders.
pub(crate) struct QuizRng {
    inner: Mutex<StdRng>,
}

impl QuizRng {
    pub(crate) fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            inner: Mutex::new(rng),
        }
    }

    /// A panic in an earlier holder leaves the generator usable; any state
    /// it reached is still a valid stream.
    pub(crate) fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
