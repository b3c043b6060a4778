/// HTTP middleware and extractors for story-service
pub mod viewer;

pub use viewer::ViewerId;
