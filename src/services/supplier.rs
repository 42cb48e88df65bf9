//! Supplier services - Gestione operazioni sui fornitori

use crate::core::{AppError, AppState, SupplierId};
use crate::dtos::{SupplierDTO, SupplierPayload, SupplierQuery};
use crate::entities::STATUS_DISABLED;
use crate::repositories::{Create, Delete, Read, ReadMany, Update};
use axum::{
    body::Bytes,
    extract::{Json, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

const JSON_MEDIA_TYPE: &str = "application/json";

#[instrument(skip(state))]
pub async fn list_suppliers(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>, // query params /suppliers?category=...&name=...
) -> Result<Json<Vec<SupplierDTO>>, AppError> {
    debug!("Request for supplier list");
    let filter = SupplierQuery::from_pairs(pairs).filter();
    let suppliers = state.supplier.read_many(&filter).await?;

    info!("Returning {} suppliers", suppliers.len());
    Ok(Json(suppliers.into_iter().map(SupplierDTO::from).collect()))
}

#[instrument(skip(state), fields(supplier_id = %supplier_id))]
pub async fn get_supplier(
    State(state): State<Arc<AppState>>,
    SupplierId(supplier_id): SupplierId, // parametro dalla URL /suppliers/{supplier_id}
) -> Result<Json<SupplierDTO>, AppError> {
    debug!("Request for supplier");
    let supplier = state
        .supplier
        .read(&supplier_id)
        .await?
        .ok_or_else(|| {
            warn!("Supplier not found");
            not_found(supplier_id)
        })?;

    info!("Returning supplier: {}", supplier.name);
    Ok(Json(SupplierDTO::from(supplier)))
}

#[instrument(skip(state, headers, body))]
pub async fn create_supplier(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes, // il body va letto per ultimo
) -> Result<impl IntoResponse, AppError> {
    debug!("Request to create a supplier");
    check_content_type(&headers, JSON_MEDIA_TYPE)?;
    let payload = SupplierPayload::from_slice(&body)?;

    let supplier = state.supplier.create(&payload).await?;
    let location = state.url_for(&headers, &format!("/suppliers/{}", supplier.id));

    info!("Supplier with ID [{}] created.", supplier.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(SupplierDTO::from(supplier)),
    ))
}

#[instrument(skip(state, headers, body), fields(supplier_id = %supplier_id))]
pub async fn update_supplier(
    State(state): State<Arc<AppState>>,
    SupplierId(supplier_id): SupplierId,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SupplierDTO>, AppError> {
    debug!("Request to update supplier");
    // 1. Content-Type (415)
    // 2. esistenza del fornitore (404)
    // 3. validazione del body (400)
    check_content_type(&headers, JSON_MEDIA_TYPE)?;

    if state.supplier.read(&supplier_id).await?.is_none() {
        warn!("Supplier not found");
        return Err(not_found(supplier_id));
    }

    let payload = SupplierPayload::from_slice(&body)?;
    let supplier = state
        .supplier
        .update(&supplier_id, &payload)
        .await
        .map_err(|e| match e {
            // cancellato tra la read e l'update
            sqlx::Error::RowNotFound => not_found(supplier_id),
            other => AppError::from(other),
        })?;

    info!("Supplier with ID [{}] updated.", supplier.id);
    Ok(Json(SupplierDTO::from(supplier)))
}

#[instrument(skip(state), fields(supplier_id = %supplier_id))]
pub async fn disable_supplier(
    State(state): State<Arc<AppState>>,
    SupplierId(supplier_id): SupplierId,
) -> Result<Json<SupplierDTO>, AppError> {
    debug!("Request to disable supplier");
    let current = state
        .supplier
        .read(&supplier_id)
        .await?
        .ok_or_else(|| {
            warn!("Supplier not found");
            not_found(supplier_id)
        })?;

    let payload = SupplierPayload::with_status(&current, STATUS_DISABLED);
    let supplier = state
        .supplier
        .update(&supplier_id, &payload)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => not_found(supplier_id),
            other => AppError::from(other),
        })?;

    info!("Supplier with ID [{}] disabled.", supplier.id);
    Ok(Json(SupplierDTO::from(supplier)))
}

#[instrument(skip(state), fields(supplier_id = %supplier_id))]
pub async fn delete_supplier(
    State(state): State<Arc<AppState>>,
    SupplierId(supplier_id): SupplierId,
) -> Result<StatusCode, AppError> {
    debug!("Request to delete supplier");
    state.supplier.delete(&supplier_id).await?;

    info!("Supplier with ID [{}] delete complete.", supplier_id);
    Ok(StatusCode::NO_CONTENT)
}

fn not_found(supplier_id: i64) -> AppError {
    AppError::not_found(format!(
        "Supplier with id '{}' was not found.",
        supplier_id
    ))
}

/// Verifica che il Content-Type della richiesta sia `media_type`.
/// Eventuali parametri (es. `; charset=utf-8`) vengono ignorati.
fn check_content_type(headers: &HeaderMap, media_type: &str) -> Result<(), AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    let matches = content_type
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(media_type));

    if matches {
        return Ok(());
    }

    error!("Invalid Content-Type: {:?}", content_type);
    Err(AppError::unsupported_media_type(format!(
        "Content-Type must be {}",
        media_type
    )))
}
