//! Supplier service library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, config};
pub use services::root;

use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    use services::*;

    Router::new()
        .route("/", get(root).fallback(method_not_allowed))
        .route("/health", get(health).fallback(method_not_allowed))
        .merge(configure_supplier_routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Configura le routes per la gestione dei fornitori
fn configure_supplier_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route(
            "/suppliers",
            get(list_suppliers)
                .post(create_supplier)
                .fallback(method_not_allowed),
        )
        .route(
            "/suppliers/{supplier_id}",
            get(get_supplier)
                .put(update_supplier)
                .delete(delete_supplier)
                .fallback(method_not_allowed),
        )
        .route(
            "/suppliers/{supplier_id}/disable",
            put(disable_supplier).fallback(method_not_allowed),
        )
}
