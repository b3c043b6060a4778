/// Story handlers - HTTP endpoints for story operations
use crate::error::Result;
use crate::metrics::stories as metrics;
use crate::middleware::ViewerId;
use crate::services::StoriesService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct CreateStoryRequest {
    pub username: String,
    pub avatar_url: Option<String>,
    pub media_url: String,
    pub caption: Option<String>,
}

/// Publish a new story
pub async fn create_story(
    service: web::Data<StoriesService>,
    viewer: ViewerId,
    req: web::Json<CreateStoryRequest>,
) -> Result<HttpResponse> {
    let story = service.publish(
        viewer.0,
        &req.username,
        req.avatar_url.as_deref(),
        &req.media_url,
        req.caption.as_deref(),
    )?;

    metrics::STORY_PUBLISH_TOTAL.inc();
    tracing::info!(story_id = %story.id, author_id = %story.author_id, "story published");

    Ok(HttpResponse::Created().json(story))
}

/// Get the tray carousel for the requesting viewer: active stories grouped
/// per author, each group flagged unseen relative to the viewer
pub async fn get_story_tray(
    service: web::Data<StoriesService>,
    viewer: ViewerId,
) -> Result<HttpResponse> {
    let tray = service.tray(viewer.0);

    metrics::STORY_TRAY_REQUEST_TOTAL
        .with_label_values(&["ok"])
        .inc();
    metrics::STORY_TRAY_GROUP_COUNT.observe(tray.len() as f64);

    Ok(HttpResponse::Ok().json(tray))
}

/// Get one author's active stories
pub async fn get_author_stories(
    service: web::Data<StoriesService>,
    author_id: web::Path<Uuid>,
    _viewer: ViewerId,
) -> Result<HttpResponse> {
    let stories = service.author_stories(*author_id);

    Ok(HttpResponse::Ok().json(stories))
}

/// Delete one of the viewer's own stories
pub async fn delete_story(
    service: web::Data<StoriesService>,
    story_id: web::Path<Uuid>,
    viewer: ViewerId,
) -> Result<HttpResponse> {
    match service.delete(viewer.0, *story_id) {
        Ok(()) => {
            metrics::STORY_DELETE_TOTAL
                .with_label_values(&["deleted"])
                .inc();
            Ok(HttpResponse::NoContent().finish())
        }
        Err(err) => {
            metrics::STORY_DELETE_TOTAL
                .with_label_values(&["not_found"])
                .inc();
            Err(err)
        }
    }
}
