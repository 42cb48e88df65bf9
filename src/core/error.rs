use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Serialize)]
struct ErrorResponse {
    status: u16,
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

/// Errore di validazione dei dati in ingresso (body di create/update)
///
/// Un solo tipo per tutte le cause (chiave mancante, tipo errato, payload non oggetto,
/// vincolo violato), così il layer HTTP lo mappa sempre su 400.
#[derive(Debug, Error, PartialEq)]
pub enum DataValidationError {
    #[error("Invalid supplier: missing {0}")]
    MissingField(&'static str),

    #[error("Invalid type for boolean [{field}]: {found}")]
    InvalidBoolean { field: &'static str, found: &'static str },

    #[error("Invalid type for string [{field}]: {found}")]
    InvalidString { field: &'static str, found: &'static str },

    #[error("Invalid supplier: body of request contained bad or no data")]
    BadData,

    #[error("Invalid supplier: {0}")]
    Constraint(String),
}

impl From<validator::ValidationErrors> for DataValidationError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Constraint(err.to_string())
    }
}

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
    details: Option<String>,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    // Common error constructors
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// 404 per un path che non corrisponde a nessuna risorsa
    pub fn path_not_found(path: &str) -> Self {
        Self::not_found(format!("{} was not found on this server.", path))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNSUPPORTED_MEDIA_TYPE, message)
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, message)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::not_found("Resource not found"),

            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                Self::service_unavailable("Database unavailable")
            }

            other => {
                error!("Database error: {:?}", other);
                Self::internal_server_error("Internal server error")
                    .with_details(other.to_string())
            }
        }
    }
}

impl From<DataValidationError> for AppError {
    fn from(err: DataValidationError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            status: self.status.as_u16(),
            error: self.status.canonical_reason().unwrap_or("Unknown"),
            message: self.message,
            details: self.details,
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlx_row_not_found_maps_to_404() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_sqlx_pool_errors_map_to_503() {
        assert_eq!(
            AppError::from(sqlx::Error::PoolTimedOut).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::from(sqlx::Error::PoolClosed).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_validation_error_maps_to_400_with_cause() {
        let err = AppError::from(DataValidationError::MissingField("name"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Invalid supplier: missing name");
    }

    #[test]
    fn test_into_response_keeps_status() {
        let response = AppError::unsupported_media_type("Content-Type must be application/json")
            .into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
