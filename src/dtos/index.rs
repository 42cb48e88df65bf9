//! Index DTO - Metadati del servizio esposti su `GET /`

use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "Supplier REST API Service";
pub const SERVICE_VERSION: &str = "1.0";

#[derive(Serialize, Deserialize, Debug)]
pub struct IndexDTO {
    pub name: String,
    pub version: String,
    /// Link alla collezione dei fornitori
    pub paths: String,
}

impl IndexDTO {
    pub fn new(paths: String) -> Self {
        Self {
            name: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            paths,
        }
    }
}
