//! Axum router configuration with middleware.
//!
//! All API routes are under `/api/`.
//! Middleware: CORS, request tracing.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Conversations
        .route(
            "/conversations",
            post(handlers::conversation::create_conversation),
        )
        .route(
            "/conversations/{id}",
            get(handlers::conversation::get_conversation),
        )
        // Messages
        .route(
            "/conversations/{id}/messages",
            get(handlers::message::list_messages).post(handlers::message::send_message),
        )
        // Quick actions
        .route(
            "/quick-actions",
            post(handlers::quick_action::quick_action),
        );

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
