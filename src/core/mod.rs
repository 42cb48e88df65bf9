//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Configurazione
//! - Gestione errori
//! - Extractor dei parametri di path
//! - Logging
//! - Stato applicazione

pub mod config;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod state;

// Re-exports per facilitare l'import
pub use config::{Config, ConfigError, LogFormat};
pub use error::{AppError, DataValidationError};
pub use extractors::SupplierId;
pub use logging::init_logging;
pub use state::AppState;
