use crate::error::{AppError, Result};
use crate::models::{Story, StoryTrayGroup};
use crate::services::grouping::{group_stories, is_unseen};
use crate::store::{StoryDraft, StoryStore};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Maximum caption length, matching the platform-wide post caption cap.
const MAX_CAPTION_LEN: usize = 2200;

/// Business logic for story publishing and the tray view.
pub struct StoriesService {
    store: Arc<StoryStore>,
    tray_story_cap: usize,
}

impl StoriesService {
    pub fn new(store: Arc<StoryStore>, tray_story_cap: usize) -> Self {
        Self {
            store,
            tray_story_cap,
        }
    }

    pub fn publish(
        &self,
        author_id: Uuid,
        username: &str,
        avatar_url: Option<&str>,
        media_url: &str,
        caption: Option<&str>,
    ) -> Result<Story> {
        if media_url.trim().is_empty() {
            return Err(AppError::Validation("media_url must not be empty".into()));
        }
        if let Some(caption) = caption {
            if caption.chars().count() > MAX_CAPTION_LEN {
                return Err(AppError::Validation(format!(
                    "caption exceeds {} characters",
                    MAX_CAPTION_LEN
                )));
            }
        }

        Ok(self.store.publish(StoryDraft {
            author_id,
            username: username.to_string(),
            avatar_url: avatar_url.map(|s| s.to_string()),
            media_url: media_url.to_string(),
            caption: caption.map(|s| s.to_string()),
        }))
    }

    /// The tray payload for `viewer_id`: active stories grouped per author
    /// in first-appearance order, each group flagged unseen for the viewer.
    ///
    /// The story list is capped before grouping so a flood of publications
    /// cannot blow up the response; the cap keeps the newest stories.
    pub fn tray(&self, viewer_id: Uuid) -> Vec<StoryTrayGroup> {
        let mut active = self.store.active(Utc::now());
        if active.len() > self.tray_story_cap {
            let skip = active.len() - self.tray_story_cap;
            active.drain(..skip);
        }

        group_stories(&active)
            .into_iter()
            .map(|group| {
                let unseen = is_unseen(&group, viewer_id);
                StoryTrayGroup::from_group(group, unseen)
            })
            .collect()
    }

    pub fn author_stories(&self, author_id: Uuid) -> Vec<Story> {
        self.store.for_author(author_id, Utc::now())
    }

    pub fn delete(&self, author_id: Uuid, story_id: Uuid) -> Result<()> {
        if self.store.delete(author_id, story_id) {
            Ok(())
        } else {
            Err(AppError::NotFound("story not found".into()))
        }
    }
}
