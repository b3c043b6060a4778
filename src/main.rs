use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use story_service::handlers;
use story_service::jobs::story_cleaner::start_story_cleaner;
use story_service::services::StoriesService;
use story_service::store::StoryStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn health_summary() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "story-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate = match signal(SignalKind::terminate()) {
            Ok(sig) => sig,
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                return;
            }
        };

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = terminate.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    }
}

/// Story Service
///
/// A microservice that owns ephemeral stories and the tray carousel view.
///
/// # Routes
///
/// - `POST   /api/v1/stories` - Publish a story
/// - `GET    /api/v1/stories/tray` - Grouped carousel payload for the viewer
/// - `GET    /api/v1/stories/user/{author_id}` - One author's active stories
/// - `DELETE /api/v1/stories/{story_id}` - Delete one's own story
///
/// Viewer identity arrives as the gateway-injected `X-User-Id` header.
/// Story-service runs on port 8086 (configurable via STORY_SERVICE_PORT).
#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match story_service::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting story-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let store = Arc::new(StoryStore::new(config.stories.ttl_hours));
    let service = web::Data::new(StoriesService::new(
        store.clone(),
        config.stories.tray_story_cap,
    ));

    // Expired-story cleaner background job
    let cleaner_store = store.clone();
    let cleaner_interval = Duration::from_secs(config.stories.cleaner_interval_secs);
    let cleaner = tokio::spawn(async move {
        start_story_cleaner(cleaner_store, cleaner_interval).await;
    });

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let server = HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in config.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(service.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route(
                "/metrics",
                web::get().to(story_service::metrics::serve_metrics),
            )
            // Health check endpoints
            .route("/api/v1/health", web::get().to(health_summary))
            .route("/api/v1/health/live", web::get().to(liveness_check))
            .service(web::scope("/api/v1").configure(handlers::story_routes))
    })
    .bind(&bind_address)?
    .workers(4)
    .run();

    let server_handle = server.handle();

    tokio::select! {
        result = server => {
            cleaner.abort();
            result?;
        }
        _ = shutdown_signal() => {
            tracing::info!("Shutdown signal received");
            server_handle.stop(true).await;
            cleaner.abort();
        }
    }

    tracing::info!("Story-service shutting down");
    Ok(())
}
