//! Integration Tests: Story tray HTTP surface
//!
//! Coverage:
//! - Viewer identity enforcement (401 without the gateway header)
//! - Publish -> tray round trip: grouping order, intra-group order, unseen flags
//! - Author story listing and owner-only deletion
//! - Expired stories excluded from the tray

use actix_web::{http::StatusCode, test, web, App};
use std::sync::Arc;
use story_service::handlers;
use story_service::services::StoriesService;
use story_service::store::{StoryDraft, StoryStore};
use uuid::Uuid;

const VIEWER_HEADER: &str = "X-User-Id";

fn uid(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn test_service(store: Arc<StoryStore>) -> web::Data<StoriesService> {
    web::Data::new(StoriesService::new(store, 500))
}

macro_rules! test_app {
    ($service:expr) => {
        test::init_service(
            App::new()
                .app_data($service.clone())
                .service(web::scope("/api/v1").configure(handlers::story_routes)),
        )
        .await
    };
}

fn publish_body(username: &str, media_url: &str) -> serde_json::Value {
    serde_json::json!({
        "username": username,
        "media_url": media_url,
    })
}

#[actix_rt::test]
async fn tray_requires_viewer_header() {
    let service = test_service(Arc::new(StoryStore::new(24)));
    let app = test_app!(service);

    let req = test::TestRequest::get()
        .uri("/api/v1/stories/tray")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn publish_then_tray_groups_and_flags_unseen() {
    let service = test_service(Arc::new(StoryStore::new(24)));
    let app = test_app!(service);

    // ama publishes, kofi publishes, ama publishes again
    for (user, n, media) in [
        (uid(1), "ama", "https://cdn.example/a1.jpg"),
        (uid(2), "kofi", "https://cdn.example/k1.jpg"),
        (uid(1), "ama", "https://cdn.example/a2.jpg"),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/v1/stories")
            .insert_header((VIEWER_HEADER, user.to_string()))
            .set_json(publish_body(n, media))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/stories/tray")
        .insert_header((VIEWER_HEADER, uid(1).to_string()))
        .to_request();
    let tray: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let groups = tray.as_array().expect("tray is an array");
    assert_eq!(groups.len(), 2);

    // ama appeared first, so that group leads and holds both stories
    // in publication order; the viewer's own group is not unseen.
    assert_eq!(groups[0]["author_id"], uid(1).to_string());
    assert_eq!(groups[0]["has_unseen"], false);
    let ama_stories = groups[0]["stories"].as_array().unwrap();
    assert_eq!(ama_stories.len(), 2);
    assert_eq!(ama_stories[0]["media_url"], "https://cdn.example/a1.jpg");
    assert_eq!(ama_stories[1]["media_url"], "https://cdn.example/a2.jpg");

    assert_eq!(groups[1]["author_id"], uid(2).to_string());
    assert_eq!(groups[1]["has_unseen"], true);
    assert_eq!(groups[1]["stories"].as_array().unwrap().len(), 1);
}

#[actix_rt::test]
async fn publish_rejects_empty_media_url() {
    let service = test_service(Arc::new(StoryStore::new(24)));
    let app = test_app!(service);

    let req = test::TestRequest::post()
        .uri("/api/v1/stories")
        .insert_header((VIEWER_HEADER, uid(1).to_string()))
        .set_json(publish_body("ama", ""))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn author_listing_and_owner_only_delete() {
    let service = test_service(Arc::new(StoryStore::new(24)));
    let app = test_app!(service);

    let req = test::TestRequest::post()
        .uri("/api/v1/stories")
        .insert_header((VIEWER_HEADER, uid(1).to_string()))
        .set_json(publish_body("ama", "https://cdn.example/a1.jpg"))
        .to_request();
    let story: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let story_id = story["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/stories/user/{}", uid(1)))
        .insert_header((VIEWER_HEADER, uid(2).to_string()))
        .to_request();
    let listed: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // kofi cannot delete ama's story
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/stories/{}", story_id))
        .insert_header((VIEWER_HEADER, uid(2).to_string()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // ama can
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/stories/{}", story_id))
        .insert_header((VIEWER_HEADER, uid(1).to_string()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri("/api/v1/stories/tray")
        .insert_header((VIEWER_HEADER, uid(2).to_string()))
        .to_request();
    let tray: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(tray.as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn expired_stories_are_excluded_from_tray() {
    // TTL of zero hours expires stories immediately.
    let store = Arc::new(StoryStore::new(0));
    store.publish(StoryDraft {
        author_id: uid(1),
        username: "ama".to_string(),
        avatar_url: None,
        media_url: "https://cdn.example/a1.jpg".to_string(),
        caption: None,
    });

    let service = test_service(store);
    let app = test_app!(service);

    let req = test::TestRequest::get()
        .uri("/api/v1/stories/tray")
        .insert_header((VIEWER_HEADER, uid(2).to_string()))
        .to_request();
    let tray: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert!(tray.as_array().unwrap().is_empty());
}
