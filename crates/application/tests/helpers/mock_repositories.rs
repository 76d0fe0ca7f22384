#![allow(dead_code)]
#![allow(unused_imports)]

use async_trait::async_trait;
use ferrous_dyndns_application::ports::RecordStore;
use ferrous_dyndns_domain::{
    DomainError, RecordClass, RecordData, RecordType, ResourceRecord, StorageKey, UpdateData,
    UpdateRecord,
};
use std::collections::{HashMap, HashSet};
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory record store keyed exactly like the real one.
#[derive(Clone, Default)]
pub struct MockRecordStore {
    sets: Arc<RwLock<HashMap<StorageKey, Vec<ResourceRecord>>>>,
    failing_names: Arc<RwLock<HashSet<String>>>,
    writes: Arc<AtomicUsize>,
    closes: Arc<AtomicUsize>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation on `name` fails with a storage error.
    pub async fn fail_on(&self, name: &str) {
        self.failing_names
            .write()
            .await
            .insert(name.trim_end_matches('.').to_string());
    }

    /// Seed a record set directly, bypassing `append`.
    pub async fn seed(&self, records: Vec<ResourceRecord>) {
        let mut sets = self.sets.write().await;
        for rr in records {
            let key = StorageKey::encode(&rr.name, rr.record_type());
            sets.entry(key).or_default().push(rr);
        }
    }

    pub async fn key_count(&self) -> usize {
        self.sets.read().await.len()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    async fn check(&self, name: &str) -> Result<(), DomainError> {
        if self
            .failing_names
            .read()
            .await
            .contains(name.trim_end_matches('.'))
        {
            return Err(DomainError::StorageFailure(format!(
                "injected failure for {}",
                name
            )));
        }
        Ok(())
    }

    fn key(name: &str, record_type: RecordType) -> Result<StorageKey, DomainError> {
        StorageKey::for_name(name, record_type).map_err(DomainError::into_key_error)
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn append(&self, record: &ResourceRecord) -> Result<(), DomainError> {
        self.check(record.name.as_str()).await?;
        let key = StorageKey::encode(&record.name, record.record_type());
        self.sets
            .write()
            .await
            .entry(key)
            .or_default()
            .push(record.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn get(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        let key = Self::key(name, record_type)?;
        self.check(name).await?;
        Ok(self
            .sets
            .read()
            .await
            .get(&key)
            .cloned()
            .unwrap_or_default())
    }

    async fn delete(&self, name: &str, record_type: RecordType) -> Result<(), DomainError> {
        let key = Self::key(name, record_type)?;
        self.check(name).await?;
        self.sets.write().await.remove(&key);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn address_update(name: &str, ttl: u32, address: &str) -> UpdateRecord {
    let data = RecordData::from(IpAddr::from_str(address).unwrap());
    UpdateRecord {
        name: name.to_string(),
        record_type: data.record_type(),
        class: RecordClass::IN,
        ttl,
        data: UpdateData::Address(data),
    }
}

pub fn delete_all_update(name: &str, record_type: RecordType) -> UpdateRecord {
    UpdateRecord {
        name: name.to_string(),
        record_type,
        class: RecordClass::ANY,
        ttl: 0,
        data: UpdateData::Empty,
    }
}

pub fn opaque_update(name: &str, record_type: RecordType) -> UpdateRecord {
    UpdateRecord {
        name: name.to_string(),
        record_type,
        class: RecordClass::IN,
        ttl: 300,
        data: UpdateData::Opaque,
    }
}
