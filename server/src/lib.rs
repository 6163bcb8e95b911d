//! Server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, config};
pub use services::root;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api/properties", configure_property_routes())
        .route("/api/properties/", get(services::missing_property_id))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Configura le routes di sola lettura sugli immobili
fn configure_property_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/", get(list_properties))
        .route("/{id}", get(get_property_by_id))
}
