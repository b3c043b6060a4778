use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Histogram, IntCounter,
    IntCounterVec,
};

lazy_static! {
    /// Total stories published.
    pub static ref STORY_PUBLISH_TOTAL: IntCounter = register_int_counter!(
        "story_publish_total",
        "Total stories published"
    )
    .expect("failed to register story_publish_total");

    /// Total tray requests by outcome (ok, unauthorized).
    pub static ref STORY_TRAY_REQUEST_TOTAL: IntCounterVec = register_int_counter_vec!(
        "story_tray_request_total",
        "Total story tray requests segmented by outcome",
        &["outcome"]
    )
    .expect("failed to register story_tray_request_total");

    /// Number of author groups per tray response.
    pub static ref STORY_TRAY_GROUP_COUNT: Histogram = register_histogram!(
        "story_tray_group_count",
        "Number of author groups returned per tray request",
        vec![0.0, 1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0]
    )
    .expect("failed to register story_tray_group_count");

    /// Total story deletions by outcome (deleted, not_found).
    pub static ref STORY_DELETE_TOTAL: IntCounterVec = register_int_counter_vec!(
        "story_delete_total",
        "Total story delete requests segmented by outcome",
        &["outcome"]
    )
    .expect("failed to register story_delete_total");
}
