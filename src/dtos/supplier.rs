//! Supplier DTOs - Data Transfer Objects per fornitori

use crate::core::DataValidationError;
use crate::entities::Supplier;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Rappresentazione JSON di un fornitore restituita al client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SupplierDTO {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub available: bool,
    pub status: String,
}

impl From<Supplier> for SupplierDTO {
    fn from(value: Supplier) -> Self {
        Self {
            id: value.id,
            name: value.name,
            category: value.category,
            available: value.available,
            status: value.status,
        }
    }
}

/// Campi di business di un fornitore (senza id), usato sia per create che per update.
///
/// L'id non viene mai letto dal body: lo assegna il database alla creazione,
/// e in update fa fede quello nel path.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
pub struct SupplierPayload {
    #[validate(length(min = 1, max = 63, message = "name must be 1-63 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 63, message = "category must be 1-63 characters"))]
    pub category: String,
    pub available: bool,
    #[validate(length(min = 1, max = 63, message = "status must be 1-63 characters"))]
    pub status: String,
}

impl SupplierPayload {
    /// Decodifica e valida il body grezzo di una richiesta
    pub fn from_slice(body: &[u8]) -> Result<Self, DataValidationError> {
        let data: Value =
            serde_json::from_slice(body).map_err(|_| DataValidationError::BadData)?;
        Self::from_value(&data)
    }

    /// Deserializza un fornitore da un valore JSON, campo per campo.
    ///
    /// Le chiavi vengono controllate nell'ordine name, category, available, status
    /// e viene riportata la prima violazione trovata.
    pub fn from_value(data: &Value) -> Result<Self, DataValidationError> {
        let object = data.as_object().ok_or(DataValidationError::BadData)?;

        let payload = Self {
            name: required_string(object, "name")?,
            category: required_string(object, "category")?,
            available: required_bool(object, "available")?,
            status: required_string(object, "status")?,
        };
        payload.validate()?;
        Ok(payload)
    }

    /// Copia di un fornitore esistente con uno status diverso
    pub fn with_status(supplier: &Supplier, status: &str) -> Self {
        Self {
            name: supplier.name.clone(),
            category: supplier.category.clone(),
            available: supplier.available,
            status: status.to_string(),
        }
    }
}

fn required_string(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<String, DataValidationError> {
    match object.get(field) {
        None => Err(DataValidationError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(DataValidationError::InvalidString {
            field,
            found: json_type(other),
        }),
    }
}

fn required_bool(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<bool, DataValidationError> {
    match object.get(field) {
        None => Err(DataValidationError::MissingField(field)),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(DataValidationError::InvalidBoolean {
            field,
            found: json_type(other),
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
