/// HTTP handlers for story endpoints
///
/// This module contains handlers for:
/// - Stories: publish, list, delete temporary visual content
/// - Tray: the grouped per-author carousel view with unseen flags
pub mod stories;

use actix_web::web;

// Re-export handler functions at module level
pub use stories::{create_story, delete_story, get_author_stories, get_story_tray};

/// Route tree for `/api/v1/stories`, shared between `main` and the
/// integration tests.
pub fn story_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/stories")
            .service(web::resource("").route(web::post().to(create_story)))
            .route("/tray", web::get().to(get_story_tray))
            .service(
                web::resource("/user/{author_id}").route(web::get().to(get_author_stories)),
            )
            .service(web::resource("/{story_id}").route(web::delete().to(delete_story))),
    );
}
