use crate::repositories::record_set_codec;
use async_trait::async_trait;
use ferrous_dyndns_application::ports::RecordStore;
use ferrous_dyndns_domain::{DomainError, RecordType, ResourceRecord, StorageKey};
use sqlx::SqlitePool;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info, instrument};

/// Record sets in the SQLite table `rr`, one row per storage key.
///
/// Writes go through `write_pool`, which must hold a single connection:
/// that is what makes the read-modify-write in `append` atomic against
/// concurrent updates of the same key.
pub struct SqliteRecordStore {
    write_pool: SqlitePool,
    read_pool: SqlitePool,
    closed: AtomicBool,
}

impl SqliteRecordStore {
    /// Reads and writes share one pool (in-memory databases, tests).
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_pools(pool.clone(), pool)
    }

    pub fn with_pools(write_pool: SqlitePool, read_pool: SqlitePool) -> Self {
        Self {
            write_pool,
            read_pool,
            closed: AtomicBool::new(false),
        }
    }

    fn key(name: &str, record_type: RecordType) -> Result<StorageKey, DomainError> {
        StorageKey::for_name(name, record_type).map_err(DomainError::into_key_error)
    }
}

fn storage_error(context: &str, e: sqlx::Error) -> DomainError {
    error!(error = %e, "{}", context);
    DomainError::StorageFailure(format!("{}: {}", context, e))
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    #[instrument(skip(self, record), fields(name = %record.name, record_type = %record.record_type()))]
    async fn append(&self, record: &ResourceRecord) -> Result<(), DomainError> {
        let key = StorageKey::encode(&record.name, record.record_type());

        let mut tx = self
            .write_pool
            .begin()
            .await
            .map_err(|e| storage_error("Failed to begin append transaction", e))?;

        let stored: Option<Vec<u8>> = sqlx::query_scalar("SELECT value FROM rr WHERE key = ?")
            .bind(key.as_str())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| storage_error("Failed to read record set", e))?;

        let mut records = match stored {
            Some(bytes) => record_set_codec::decode(&bytes)?,
            None => Vec::new(),
        };
        records.push(record.clone());
        let value = record_set_codec::encode(&records)?;

        sqlx::query(
            "INSERT INTO rr (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key.as_str())
        .bind(value)
        .execute(&mut *tx)
        .await
        .map_err(|e| storage_error("Failed to write record set", e))?;

        tx.commit()
            .await
            .map_err(|e| storage_error("Failed to commit append transaction", e))?;

        debug!(key = %key, records = records.len(), "Record set updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        let key = Self::key(name, record_type)?;

        let stored: Option<Vec<u8>> = sqlx::query_scalar("SELECT value FROM rr WHERE key = ?")
            .bind(key.as_str())
            .fetch_optional(&self.read_pool)
            .await
            .map_err(|e| storage_error("Failed to read record set", e))?;

        match stored {
            Some(bytes) => record_set_codec::decode(&bytes),
            None => Ok(Vec::new()),
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, name: &str, record_type: RecordType) -> Result<(), DomainError> {
        let key = Self::key(name, record_type)?;

        let mut tx = self
            .write_pool
            .begin()
            .await
            .map_err(|e| storage_error("Failed to begin delete transaction", e))?;

        let result = sqlx::query("DELETE FROM rr WHERE key = ?")
            .bind(key.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| storage_error("Failed to delete record set", e))?;

        tx.commit()
            .await
            .map_err(|e| storage_error("Failed to commit delete transaction", e))?;

        debug!(key = %key, removed = result.rows_affected(), "Record set deleted");
        Ok(())
    }

    async fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        self.write_pool.close().await;
        self.read_pool.close().await;
        info!("Record store closed");
    }
}
