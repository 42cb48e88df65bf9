//! Supplier entity - Entità fornitore

use serde::{Deserialize, Serialize};

/// Valore di `status` impostato dall'operazione di disable
pub const STATUS_DISABLED: &str = "disabled";

/// Riga della tabella `suppliers`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub available: bool,
    pub status: String,
}
