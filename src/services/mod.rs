//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod supplier;

// Re-exports per facilitare l'import
pub use supplier::{
    create_supplier, delete_supplier, disable_supplier, get_supplier, list_suppliers,
    update_supplier,
};

use crate::core::{AppError, AppState};
use crate::dtos::IndexDTO;
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

/// Root endpoint - metadati del servizio
pub async fn root(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Json<IndexDTO> {
    debug!("Request for Root URL");
    Json(IndexDTO::new(state.url_for(&headers, "/suppliers")))
}

/// Health check - verifica anche la raggiungibilità del database
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.supplier.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        Err(e) => {
            warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "degraded", "database": "unavailable" })),
            )
        }
    }
}

/// Fallback per i path sconosciuti
pub async fn not_found(uri: Uri) -> AppError {
    warn!("No route for {}", uri.path());
    AppError::path_not_found(uri.path())
}

/// Fallback per i metodi non supportati su un path esistente
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    warn!("Method {} not allowed on {}", method, uri.path());
    AppError::method_not_allowed(format!(
        "The method {} is not allowed for {}.",
        method,
        uri.path()
    ))
}
