/// Data models for story-service
///
/// This module defines structures for:
/// - Story: Temporary visual content published by a user
/// - StoryGroup: Per-author aggregate derived for the tray carousel
/// - StoryTrayGroup: A StoryGroup decorated with the viewer-facing unseen flag
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published story. Stories expire after a configured TTL and are
/// purged by the background cleaner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: Uuid,
    pub author_id: Uuid,
    pub username: String,
    pub avatar_url: Option<String>,
    pub media_url: String,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Story {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Per-author aggregate of stories, derived fresh on every tray request.
///
/// `username` and `avatar_url` are copied from the first story encountered
/// for the author; `stories` preserves the relative order of the input.
/// The group carries no viewer-specific state (see `StoryTrayGroup`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryGroup {
    pub author_id: Uuid,
    pub username: String,
    pub avatar_url: Option<String>,
    pub stories: Vec<Story>,
}

/// Tray response entry: a `StoryGroup` plus the unseen flag computed for
/// the requesting viewer.
#[derive(Debug, Clone, Serialize)]
pub struct StoryTrayGroup {
    pub author_id: Uuid,
    pub username: String,
    pub avatar_url: Option<String>,
    pub has_unseen: bool,
    pub stories: Vec<Story>,
}

impl StoryTrayGroup {
    pub fn from_group(group: StoryGroup, has_unseen: bool) -> Self {
        Self {
            author_id: group.author_id,
            username: group.username,
            avatar_url: group.avatar_url,
            has_unseen,
            stories: group.stories,
        }
    }
}
