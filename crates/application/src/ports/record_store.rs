use async_trait::async_trait;
use ferrous_dyndns_domain::{DomainError, RecordType, ResourceRecord};

/// Transactional storage of record sets keyed by (owner name, record type).
///
/// Every mutation runs in a single storage transaction, so concurrent
/// appends to the same key never lose a write.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Add `record` to the end of the record set for its name and type.
    /// Duplicates are kept.
    async fn append(&self, record: &ResourceRecord) -> Result<(), DomainError>;

    /// The stored record set in insertion order; empty when nothing is stored.
    async fn get(&self, name: &str, record_type: RecordType)
        -> Result<Vec<ResourceRecord>, DomainError>;

    /// Drop the whole record set. Deleting an absent key succeeds.
    async fn delete(&self, name: &str, record_type: RecordType) -> Result<(), DomainError>;

    /// Release the storage handle. Later calls are no-ops.
    async fn close(&self);
}
