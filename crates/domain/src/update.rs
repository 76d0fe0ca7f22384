use crate::{RecordType, ResourceRecord};

/// What the update engine did with one update record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Appended(ResourceRecord),
    Deleted { name: String, record_type: RecordType },
    Skipped(SkipReason),
}

/// Records intentionally left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    InvalidName(String),
    UnsupportedType(RecordType),
    /// Empty rdata outside the class ANY delete-all form.
    EmptyPayload,
}

impl UpdateOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, UpdateOutcome::Skipped(_))
    }
}
