//! Entities module - Entità del dominio applicativo
//!
//! Ogni entity corrisponde a una tabella nel database.

pub mod supplier;

// Re-exports per facilitare l'import
pub use supplier::{STATUS_DISABLED, Supplier};
