use ferrous_dyndns_domain::{
    DomainError, DomainName, RecordClass, ResourceRecord, SkipReason, UpdateData, UpdateOutcome,
    UpdateRecord,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::RecordStore;

/// Applies one update-section record to the record store.
///
/// Only two operations exist: class ANY with empty rdata deletes every record
/// of that type for the name, and an address record is appended (normalized
/// to class IN, TTL kept). Everything else is skipped without touching the
/// store.
pub struct ApplyUpdateUseCase {
    store: Arc<dyn RecordStore>,
}

impl ApplyUpdateUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self, record), fields(name = %record.name, record_type = %record.record_type))]
    pub async fn execute(&self, record: &UpdateRecord) -> Result<UpdateOutcome, DomainError> {
        let name = match DomainName::parse(&record.name) {
            Ok(name) => name,
            Err(e) => {
                debug!(error = %e, "Skipping update record with invalid owner name");
                return Ok(UpdateOutcome::Skipped(SkipReason::InvalidName(
                    record.name.clone(),
                )));
            }
        };

        if record.is_delete_all() {
            self.store.delete(name.as_str(), record.record_type).await?;
            info!("Record set deleted");
            return Ok(UpdateOutcome::Deleted {
                name: name.as_str().to_string(),
                record_type: record.record_type,
            });
        }

        match record.data {
            UpdateData::Address(data) => {
                let rr = ResourceRecord::new(name, RecordClass::IN, record.ttl, data);
                self.store.append(&rr).await?;
                info!(address = %data, ttl = record.ttl, "Record appended");
                Ok(UpdateOutcome::Appended(rr))
            }
            UpdateData::Opaque => {
                debug!("Skipping unmanaged record type");
                Ok(UpdateOutcome::Skipped(SkipReason::UnsupportedType(
                    record.record_type,
                )))
            }
            UpdateData::Empty => {
                debug!(class = %record.class, "Skipping empty update record");
                Ok(UpdateOutcome::Skipped(SkipReason::EmptyPayload))
            }
        }
    }
}
