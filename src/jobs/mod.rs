/// Background jobs for story-service
pub mod story_cleaner;
