//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod index;
pub mod query;
pub mod supplier;

// Re-exports per facilitare l'import
pub use index::IndexDTO;
pub use query::{SupplierFilter, SupplierQuery};
pub use supplier::{SupplierDTO, SupplierPayload};
