//! Story tray grouping.
//!
//! Converts the flat, chronologically ordered story list into the per-author
//! groups the tray carousel renders left to right. Group order is a contract:
//! groups appear in the order their author first appears in the input, and
//! stories keep their relative input order within each group.
//!
//! Both functions are pure and total: no I/O, no shared state, no failure
//! modes. Every call allocates a fresh result, so overlapping callers never
//! observe partial state.

use crate::models::{Story, StoryGroup};
use std::collections::HashMap;
use uuid::Uuid;

/// Group a flat story list by author, preserving first-appearance order.
///
/// Groups are accumulated in an explicit `Vec` with a `HashMap` index from
/// `author_id` to position, so the output order never depends on map
/// iteration order. Duplicate story ids are passed through untouched; an
/// empty `username` or missing `avatar_url` is copied as-is from the first
/// story of the author (the renderer substitutes placeholders downstream).
pub fn group_stories(items: &[Story]) -> Vec<StoryGroup> {
    let mut groups: Vec<StoryGroup> = Vec::new();
    let mut index: HashMap<Uuid, usize> = HashMap::new();

    for story in items {
        let slot = match index.get(&story.author_id) {
            Some(&i) => i,
            None => {
                groups.push(StoryGroup {
                    author_id: story.author_id,
                    username: story.username.clone(),
                    avatar_url: story.avatar_url.clone(),
                    stories: Vec::new(),
                });
                let i = groups.len() - 1;
                index.insert(story.author_id, i);
                i
            }
        };
        groups[slot].stories.push(story.clone());
    }

    groups
}

/// Whether a group should render with the unseen ring for `viewer_id`.
///
/// The platform does not track per-viewer view history; "unseen" means
/// "not authored by the viewer". See the tray handler for where this feeds
/// the response.
pub fn is_unseen(group: &StoryGroup, viewer_id: Uuid) -> bool {
    group.author_id != viewer_id
}
