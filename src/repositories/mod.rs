//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//! Le query sono scritte con `sqlx::query` / `sqlx::query_as` e controllate a runtime,
//! così il crate compila senza un database raggiungibile.

pub mod supplier;
pub mod traits;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::time::Duration;
use tracing::info;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, ReadMany, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use supplier::SupplierRepository;

// alias di tipo per il pool, per semplificare lo switch in caso in cui vogliamo usare un altro db
pub type PoolType = SqlitePool;

/// Apre il pool di connessioni verso `database_url`.
///
/// Un database `sqlite::memory:` vive solo finché vive la sua connessione:
/// in quel caso il pool tiene una sola connessione che non scade mai.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PoolType, sqlx::Error> {
    let in_memory = database_url.contains(":memory:");
    let options = SqlitePoolOptions::new().acquire_timeout(acquire_timeout);

    let options = if in_memory {
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        options.max_connections(max_connections)
    };

    let pool = options.connect(database_url).await?;
    info!(in_memory, "Database pool ready");
    Ok(pool)
}
