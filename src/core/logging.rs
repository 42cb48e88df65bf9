//! Inizializzazione del subscriber tracing

use super::config::LogFormat;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "info,supplier_service=debug,tower_http=info";

/// Inizializza il subscriber globale.
/// Rispetta `RUST_LOG` se impostata, altrimenti usa `DEFAULT_FILTER`.
/// Chiamate successive alla prima non hanno effetto.
pub fn init_logging(format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = match format {
        LogFormat::Json => fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .try_init(),
        LogFormat::Pretty => fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .compact()
            .try_init(),
    };
}
