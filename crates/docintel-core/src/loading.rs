//! In-flight operation tracking behind each store's `is_loading` flag.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts store operations currently awaiting their simulated round-trip.
///
/// Overlapping calls keep the store "loading" until the last one finishes.
#[derive(Debug, Clone, Default)]
pub struct LoadingTracker {
    in_flight: Arc<AtomicUsize>,
}

impl LoadingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an operation as started; it ends when the guard drops.
    pub fn begin(&self) -> LoadingGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        LoadingGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }
}

#[must_use = "the operation stops counting as in-flight when the guard is dropped"]
#[derive(Debug)]
pub struct LoadingGuard {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}
