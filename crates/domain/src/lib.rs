//! Dynamic DNS Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod storage_key;
pub mod update;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_message::{DnsMessage, Opcode, Question, UpdateData, UpdateRecord};
pub use dns_record::{RecordClass, RecordData, RecordType, ResourceRecord};
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use storage_key::StorageKey;
pub use update::{SkipReason, UpdateOutcome};
