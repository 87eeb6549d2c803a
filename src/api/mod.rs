mod handlers;
mod sessions;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controller::Controller;

pub use sessions::SessionStore;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Controller>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller: Arc::new(controller),
            sessions: SessionStore::new(),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Sessions
        .route("/sessions", post(handlers::create_session))
        .route("/sessions/{id}", get(handlers::get_session))
        .route("/sessions/{id}/name", post(handlers::generate_name))
        .route("/sessions/{id}/logo", post(handlers::generate_logo))
        .route("/sessions/{id}/feedback", post(handlers::submit_feedback))
        // History
        .route("/history", get(handlers::list_history))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .route("/", get(handlers::index))
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
