use tracing::{debug, info};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Sequencing engine usage counters
#[derive(Debug, Default)]
pub struct SequencerMetrics {
    pub sessions_created: AtomicU64,
    pub sessions_started: AtomicU64,
    pub sessions_paused: AtomicU64,
    pub sessions_completed: AtomicU64,
    pub sessions_duplicated: AtomicU64,
    pub sessions_deleted: AtomicU64,
    pub items_completed: AtomicU64,
    pub items_skipped: AtomicU64,
    pub noop_operations: AtomicU64,
}

impl SequencerMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_created(&self) {
        self.sessions_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_started(&self) {
        self.sessions_started.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_paused(&self) {
        self.sessions_paused.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_session_completed(&self) {
        self.sessions_completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_duplicated(&self) {
        self.sessions_duplicated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_deleted(&self) {
        self.sessions_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_item_completed(&self) {
        self.items_completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_item_skipped(&self) {
        self.items_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_noop(&self) {
        self.noop_operations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> SequencerStats {
        SequencerStats {
            sessions_created: self.sessions_created.load(Ordering::Relaxed),
            sessions_started: self.sessions_started.load(Ordering::Relaxed),
            sessions_paused: self.sessions_paused.load(Ordering::Relaxed),
            sessions_completed: self.sessions_completed.load(Ordering::Relaxed),
            sessions_duplicated: self.sessions_duplicated.load(Ordering::Relaxed),
            sessions_deleted: self.sessions_deleted.load(Ordering::Relaxed),
            items_completed: self.items_completed.load(Ordering::Relaxed),
            items_skipped: self.items_skipped.load(Ordering::Relaxed),
            noop_operations: self.noop_operations.load(Ordering::Relaxed),
        }
    }

    pub fn log_stats(&self) {
        let stats = self.snapshot();
        info!(
            sessions_created = stats.sessions_created,
            sessions_started = stats.sessions_started,
            sessions_completed = stats.sessions_completed,
            items_completed = stats.items_completed,
            items_skipped = stats.items_skipped,
            noop_operations = stats.noop_operations,
            "Sequencer metrics"
        );
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct SequencerStats {
    pub sessions_created: u64,
    pub sessions_started: u64,
    pub sessions_paused: u64,
    pub sessions_completed: u64,
    pub sessions_duplicated: u64,
    pub sessions_deleted: u64,
    pub items_completed: u64,
    pub items_skipped: u64,
    pub noop_operations: u64,
}

/// Time an operation; logs its duration when dropped
pub struct OperationTimer {
    operation: &'static str,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            start: Instant::now(),
        }
    }
}

impl Drop for OperationTimer {
    fn drop(&mut self) {
        debug!(
            operation = %self.operation,
            duration_us = self.start.elapsed().as_micros() as u64,
            "Operation completed"
        );
    }
}

#[macro_export]
macro_rules! time_operation {
    ($operation:expr) => {
        let _timer = $crate::observability::OperationTimer::new($operation);
    };
}
