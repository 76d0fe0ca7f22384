use crate::DomainError;
use std::fmt;
use std::str::FromStr;

const MAX_LABEL_LEN: usize = 63;
const MAX_WIRE_LEN: usize = 255;

/// A validated, fully qualified domain name.
///
/// The text is kept exactly as received (no case folding) except that a
/// trailing dot is appended when missing, so `host.example.com` and
/// `host.example.com.` denote the same name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(String);

impl DomainName {
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        if name.is_empty() {
            return Err(DomainError::InvalidName("empty name".to_string()));
        }

        if name == "." {
            return Ok(Self::root());
        }

        if name.contains('\\') {
            return Err(DomainError::InvalidName(format!(
                "escaped labels are not supported: {}",
                name
            )));
        }

        let relative = name.strip_suffix('.').unwrap_or(name);
        let mut wire_len = 1;

        for label in relative.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidName(format!("empty label in {}", name)));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidName(format!(
                    "label longer than {} octets in {}",
                    MAX_LABEL_LEN, name
                )));
            }
            wire_len += label.len() + 1;
        }

        if wire_len > MAX_WIRE_LEN {
            return Err(DomainError::InvalidName(format!(
                "name longer than {} octets: {}",
                MAX_WIRE_LEN, name
            )));
        }

        Ok(Self(format!("{}.", relative)))
    }

    pub fn root() -> Self {
        Self(".".to_string())
    }

    pub fn is_root(&self) -> bool {
        self.0 == "."
    }

    pub fn is_valid(name: &str) -> bool {
        Self::parse(name).is_ok()
    }

    /// Labels from the leftmost (most specific) to the top-level label.
    /// The root name has no labels.
    pub fn labels(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.0
            .strip_suffix('.')
            .unwrap_or_default()
            .split('.')
            .filter(|label| !label.is_empty())
    }

    pub fn label_count(&self) -> usize {
        self.labels().count()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
