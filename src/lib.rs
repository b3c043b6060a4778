/// Story Service Library
///
/// Owns ephemeral stories for the Nova social platform: publishing,
/// expiry, and the tray carousel view (per-author grouping with unseen
/// flags). Extracted from content-service to keep story lifecycle and
/// tray assembly independently deployable.
///
/// # Modules
///
/// - `handlers`: Story HTTP request handlers and route tree
/// - `models`: Data structures for stories and tray groups
/// - `services`: Business logic layer, including the tray grouping
/// - `store`: In-memory story repository
/// - `middleware`: Viewer identity extraction
/// - `jobs`: Expired-story cleanup
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Observability and metrics collection
pub mod config;
pub mod error;
pub mod handlers;
pub mod jobs;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{AppError, Result};
