//! In-memory story repository.
//!
//! Stories are kept in publication order, which is the chronological order
//! the tray grouper relies on. The lock is only held for the duration of a
//! synchronous operation and never across an await point.

use crate::models::Story;
use chrono::{DateTime, Duration, Utc};
use std::sync::RwLock;
use uuid::Uuid;

/// Input for publishing a new story. The store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct StoryDraft {
    pub author_id: Uuid,
    pub username: String,
    pub avatar_url: Option<String>,
    pub media_url: String,
    pub caption: Option<String>,
}

pub struct StoryStore {
    stories: RwLock<Vec<Story>>,
    ttl: Duration,
}

impl StoryStore {
    pub fn new(ttl_hours: i64) -> Self {
        Self {
            stories: RwLock::new(Vec::new()),
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Publish a story, assigning its id and expiry server-side.
    pub fn publish(&self, draft: StoryDraft) -> Story {
        let now = Utc::now();
        let story = Story {
            id: Uuid::new_v4(),
            author_id: draft.author_id,
            username: draft.username,
            avatar_url: draft.avatar_url,
            media_url: draft.media_url,
            caption: draft.caption,
            created_at: now,
            expires_at: now + self.ttl,
        };

        let mut stories = self.stories.write().unwrap_or_else(|e| e.into_inner());
        stories.push(story.clone());
        story
    }

    /// All non-expired stories, oldest first (publication order).
    pub fn active(&self, now: DateTime<Utc>) -> Vec<Story> {
        let stories = self.stories.read().unwrap_or_else(|e| e.into_inner());
        stories
            .iter()
            .filter(|s| !s.is_expired(now))
            .cloned()
            .collect()
    }

    /// A single author's non-expired stories, oldest first.
    pub fn for_author(&self, author_id: Uuid, now: DateTime<Utc>) -> Vec<Story> {
        let stories = self.stories.read().unwrap_or_else(|e| e.into_inner());
        stories
            .iter()
            .filter(|s| s.author_id == author_id && !s.is_expired(now))
            .cloned()
            .collect()
    }

    /// Remove a story owned by `author_id`. Returns false when the story
    /// does not exist or belongs to another author.
    pub fn delete(&self, author_id: Uuid, story_id: Uuid) -> bool {
        let mut stories = self.stories.write().unwrap_or_else(|e| e.into_inner());
        let before = stories.len();
        stories.retain(|s| !(s.id == story_id && s.author_id == author_id));
        stories.len() < before
    }

    /// Physically remove expired stories. Returns the number purged.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut stories = self.stories.write().unwrap_or_else(|e| e.into_inner());
        let before = stories.len();
        stories.retain(|s| !s.is_expired(now));
        before - stories.len()
    }
}
