//! SupplierRepository - Repository per la gestione dei fornitori

use super::{Create, Delete, PoolType, Read, ReadMany, Update};
use crate::dtos::{SupplierFilter, SupplierPayload};
use crate::entities::Supplier;
use sqlx::Error;
use tracing::{debug, info, instrument};

// SUPPLIER REPOSITORY
pub struct SupplierRepository {
    connection_pool: PoolType,
}

impl SupplierRepository {
    pub fn new(connection_pool: PoolType) -> Self {
        Self { connection_pool }
    }

    /// Crea la tabella `suppliers` se non esiste.
    /// AUTOINCREMENT impedisce il riuso degli id dopo una delete.
    #[instrument(skip(self))]
    pub async fn init_schema(&self) -> Result<(), Error> {
        info!("Initializing database schema");
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS suppliers (
                id        INTEGER PRIMARY KEY AUTOINCREMENT,
                name      VARCHAR(63) NOT NULL,
                category  VARCHAR(63) NOT NULL,
                available BOOLEAN     NOT NULL DEFAULT FALSE,
                status    VARCHAR(63) NOT NULL
            )
            "#,
        )
        .execute(&self.connection_pool)
        .await?;

        Ok(())
    }

    /// Verifica che il database risponda
    pub async fn ping(&self) -> Result<(), Error> {
        sqlx::query("SELECT 1")
            .execute(&self.connection_pool)
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Supplier>, Error> {
        debug!("Processing all suppliers");
        sqlx::query_as::<_, Supplier>(
            "SELECT id, name, category, available, status FROM suppliers",
        )
        .fetch_all(&self.connection_pool)
        .await
    }

    #[instrument(skip(self))]
    pub async fn find_by_category(&self, category: &str) -> Result<Vec<Supplier>, Error> {
        debug!("Processing category query");
        sqlx::query_as::<_, Supplier>(
            "SELECT id, name, category, available, status FROM suppliers WHERE category = ?",
        )
        .bind(category)
        .fetch_all(&self.connection_pool)
        .await
    }

    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Supplier>, Error> {
        debug!("Processing name query");
        sqlx::query_as::<_, Supplier>(
            "SELECT id, name, category, available, status FROM suppliers WHERE name = ?",
        )
        .bind(name)
        .fetch_all(&self.connection_pool)
        .await
    }

    #[instrument(skip(self))]
    pub async fn find_by_availability(&self, available: bool) -> Result<Vec<Supplier>, Error> {
        debug!("Processing available query");
        sqlx::query_as::<_, Supplier>(
            "SELECT id, name, category, available, status FROM suppliers WHERE available = ?",
        )
        .bind(available)
        .fetch_all(&self.connection_pool)
        .await
    }
}

impl Create<Supplier, SupplierPayload> for SupplierRepository {
    #[instrument(skip(self, data), fields(name = %data.name))]
    async fn create(&self, data: &SupplierPayload) -> Result<Supplier, Error> {
        debug!("Creating supplier");
        let result = sqlx::query(
            "INSERT INTO suppliers (name, category, available, status) VALUES (?, ?, ?, ?)",
        )
        .bind(&data.name)
        .bind(&data.category)
        .bind(data.available)
        .bind(&data.status)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_rowid();
        info!("Supplier created with id {}", new_id);

        Ok(Supplier {
            id: new_id,
            name: data.name.clone(),
            category: data.category.clone(),
            available: data.available,
            status: data.status.clone(),
        })
    }
}

impl Read<Supplier, i64> for SupplierRepository {
    #[instrument(skip(self))]
    async fn read(&self, id: &i64) -> Result<Option<Supplier>, Error> {
        debug!("Processing lookup for id {}", id);
        sqlx::query_as::<_, Supplier>(
            "SELECT id, name, category, available, status FROM suppliers WHERE id = ?",
        )
        .bind(*id)
        .fetch_optional(&self.connection_pool)
        .await
    }
}

impl ReadMany<Supplier, SupplierFilter> for SupplierRepository {
    #[instrument(skip(self))]
    async fn read_many(&self, filter: &SupplierFilter) -> Result<Vec<Supplier>, Error> {
        match filter {
            SupplierFilter::All => self.find_all().await,
            SupplierFilter::Category(category) => self.find_by_category(category).await,
            SupplierFilter::Name(name) => self.find_by_name(name).await,
            SupplierFilter::Availability(available) => {
                self.find_by_availability(*available).await
            }
        }
    }
}

impl Update<Supplier, SupplierPayload, i64> for SupplierRepository {
    #[instrument(skip(self, data), fields(name = %data.name))]
    async fn update(&self, id: &i64, data: &SupplierPayload) -> Result<Supplier, Error> {
        debug!("Saving supplier");
        let result = sqlx::query(
            "UPDATE suppliers SET name = ?, category = ?, available = ?, status = ? WHERE id = ?",
        )
        .bind(&data.name)
        .bind(&data.category)
        .bind(data.available)
        .bind(&data.status)
        .bind(*id)
        .execute(&self.connection_pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        Ok(Supplier {
            id: *id,
            name: data.name.clone(),
            category: data.category.clone(),
            available: data.available,
            status: data.status.clone(),
        })
    }
}

impl Delete<i64> for SupplierRepository {
    #[instrument(skip(self))]
    async fn delete(&self, id: &i64) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = ?")
            .bind(*id)
            .execute(&self.connection_pool)
            .await?;

        debug!("Deleted {} rows", result.rows_affected());
        Ok(())
    }
}
