//! Prometheus metrics for the expired-story cleaner job.

use once_cell::sync::Lazy;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Histogram, IntCounter,
    IntCounterVec,
};
use std::time::Duration;

/// Total number of purge cycles run (success/error)
static CLEANER_RUNS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "story_cleaner_runs_total",
        "Total number of expired-story purge cycles (success/error)",
        &["status"]
    )
    .expect("failed to register story_cleaner_runs_total")
});

/// Duration of purge cycles
static CLEANER_DURATION_SECONDS: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "story_cleaner_duration_seconds",
        "Duration of expired-story purge cycles",
        vec![0.0001, 0.001, 0.01, 0.1, 0.5, 1.0]
    )
    .expect("failed to register story_cleaner_duration_seconds")
});

/// Total stories purged
static STORIES_PURGED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "story_cleaner_purged_total",
        "Total expired stories physically removed"
    )
    .expect("failed to register story_cleaner_purged_total")
});

/// Record a purge cycle completion
pub fn record_cleaner_run(status: &str) {
    CLEANER_RUNS_TOTAL.with_label_values(&[status]).inc();
}

/// Record purge cycle duration
pub fn record_cleaner_duration(duration: Duration) {
    CLEANER_DURATION_SECONDS.observe(duration.as_secs_f64());
}

/// Record the number of stories purged in a cycle
pub fn record_purged(count: usize) {
    STORIES_PURGED_TOTAL.inc_by(count as u64);
}
