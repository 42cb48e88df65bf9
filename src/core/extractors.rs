//! Extractor per i parametri di path

use super::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use tracing::warn;

/// Id del fornitore preso da `/suppliers/{supplier_id}`.
///
/// Un segmento che non è un intero a 64 bit non può identificare nessun fornitore,
/// quindi la richiesta riceve lo stesso 404 JSON di un path sconosciuto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupplierId(pub i64);

impl<S> FromRequestParts<S> for SupplierId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(SupplierId(id)),
            Err(rejection) => {
                warn!(
                    "Invalid supplier id in {}: {}",
                    parts.uri.path(),
                    rejection.body_text()
                );
                Err(AppError::path_not_found(parts.uri.path()))
            }
        }
    }
}
