use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidName(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedType(String),

    #[error("Storage failure: {0}")]
    StorageFailure(String),

    #[error("Serialization failure: {0}")]
    SerializationFailure(String),
}

impl DomainError {
    /// Reclassify a name-validation failure as a key failure, leaving every
    /// other variant untouched.
    pub fn into_key_error(self) -> Self {
        match self {
            DomainError::InvalidName(name) => DomainError::InvalidKey(name),
            other => other,
        }
    }
}
