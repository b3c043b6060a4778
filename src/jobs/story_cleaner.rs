//! Expired-story cleaner background job.
//!
//! Expired stories are already invisible to every read path (`active` and
//! `for_author` filter on `expires_at`), so this job only reclaims memory.
//! It runs on a fixed interval and physically removes stories whose expiry
//! has passed.

use crate::metrics::story_cleaner as metrics;
use crate::store::StoryStore;
use chrono::Utc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::sleep;

pub async fn start_story_cleaner(store: Arc<StoryStore>, interval: Duration) {
    tracing::info!(
        interval_secs = interval.as_secs(),
        "Starting expired-story cleaner background job"
    );

    loop {
        sleep(interval).await;

        let cycle_start = Instant::now();
        let purged = store.purge_expired(Utc::now());

        metrics::record_cleaner_run("success");
        metrics::record_cleaner_duration(cycle_start.elapsed());
        metrics::record_purged(purged);

        if purged > 0 {
            tracing::info!(
                purged,
                duration_ms = cycle_start.elapsed().as_millis(),
                "Purged expired stories"
            );
        } else {
            tracing::debug!("No expired stories to purge");
        }
    }
}
