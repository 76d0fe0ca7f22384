//! Storage keys for record sets.
//!
//! A key is the owner name with its labels reversed (top-level label first)
//! followed by `_` and the decimal record type code, e.g. `com.example_1` for
//! the A records of `example.com.`. Names under the same zone therefore share
//! a key prefix.

use crate::{DomainError, DomainName, RecordType};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StorageKey(String);

impl StorageKey {
    /// `record_type` is normalized first: `Unknown(1)` and `A` are one type
    /// and share one key, which decodes to `A`.
    pub fn encode(name: &DomainName, record_type: RecordType) -> Self {
        let reversed: Vec<&str> = name.labels().rev().collect();
        Self(format!(
            "{}_{}",
            reversed.join("."),
            record_type.normalized().to_u16()
        ))
    }

    /// Validate `name` and derive its key.
    pub fn for_name(name: &str, record_type: RecordType) -> Result<Self, DomainError> {
        let name = DomainName::parse(name)?;
        Ok(Self::encode(&name, record_type))
    }

    /// Recover the fully qualified name and record type a key was built from.
    pub fn decode(&self) -> Result<(DomainName, RecordType), DomainError> {
        let (reversed, code) = self
            .0
            .rsplit_once('_')
            .ok_or_else(|| DomainError::InvalidKey(self.0.clone()))?;

        if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidKey(self.0.clone()));
        }
        let code = code
            .parse::<u16>()
            .map_err(|_| DomainError::InvalidKey(self.0.clone()))?;

        let name = if reversed.is_empty() {
            DomainName::root()
        } else {
            let labels: Vec<&str> = reversed.split('.').rev().collect();
            DomainName::parse(&labels.join("."))
                .map_err(|_| DomainError::InvalidKey(self.0.clone()))?
        };

        Ok((name, RecordType::from_u16(code)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
