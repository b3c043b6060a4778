/// Storage layer for story-service
///
/// Stories are ephemeral by design (they expire after a TTL and are never
/// persisted), so the store is an in-memory repository rather than a
/// database-backed one.
pub mod story_store;

pub use story_store::{StoryDraft, StoryStore};
