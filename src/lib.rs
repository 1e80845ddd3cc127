//! Lunara server library - cycle tracking core with staff support chat
//!
//! The UI layer consumes this crate as plain function calls (the
//! services module) and live subscriptions; only the file-resource
//! surface is HTTP, assembled here as an axum router.

pub mod core;
pub mod cycle;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;
pub mod store;

// Re-exports of the types nearly every caller needs
pub use crate::core::{AppError, AppState, Config, Session};
pub use crate::cycle::{CycleStatus, Phase};
pub use crate::store::Subscription;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Build the HTTP router: health check plus the resources surface.
/// The API is called from browsers, hence the permissive CORS layer.
pub fn create_router(state: Arc<AppState>) -> Router {
    use services::root;

    Router::new()
        .route("/", get(root))
        .merge(configure_resource_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Routes for PDF resource upload and listing
fn configure_resource_routes() -> Router<Arc<AppState>> {
    use services::{list_resources, upload_resource};

    Router::new().route("/resources", get(list_resources).post(upload_resource))
}
