/// Business logic layer for story-service
///
/// - `grouping`: pure derivation of the tray carousel groups
/// - `stories`: story lifecycle (publish, list, delete) and tray assembly
pub mod grouping;
pub mod stories;

// Re-export commonly used items
pub use grouping::{group_stories, is_unseen};
pub use stories::StoriesService;
