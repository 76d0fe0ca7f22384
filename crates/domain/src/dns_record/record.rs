use super::{RecordClass, RecordType};
use crate::{DomainError, DomainName};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Type-specific payload. Only address records are understood natively, so
/// the record type is always implied by the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::AAAA(_) => RecordType::AAAA,
        }
    }

    pub fn address(&self) -> IpAddr {
        match self {
            RecordData::A(ip) => IpAddr::V4(*ip),
            RecordData::AAAA(ip) => IpAddr::V6(*ip),
        }
    }

    fn parse(record_type: RecordType, text: &str) -> Result<Self, DomainError> {
        match record_type {
            RecordType::A => text.parse::<Ipv4Addr>().map(RecordData::A).map_err(|e| {
                DomainError::SerializationFailure(format!("invalid A rdata '{}': {}", text, e))
            }),
            RecordType::AAAA => text.parse::<Ipv6Addr>().map(RecordData::AAAA).map_err(|e| {
                DomainError::SerializationFailure(format!("invalid AAAA rdata '{}': {}", text, e))
            }),
            other => Err(DomainError::UnsupportedType(other.to_string())),
        }
    }
}

impl From<IpAddr> for RecordData {
    fn from(address: IpAddr) -> Self {
        match address {
            IpAddr::V4(ip) => RecordData::A(ip),
            IpAddr::V6(ip) => RecordData::AAAA(ip),
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(ip) => write!(f, "{}", ip),
            RecordData::AAAA(ip) => write!(f, "{}", ip),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRecord {
    pub name: DomainName,

    pub class: RecordClass,

    pub ttl: u32,

    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: DomainName, class: RecordClass, ttl: u32, data: RecordData) -> Self {
        Self {
            name,
            class,
            ttl,
            data,
        }
    }

    /// Address record in class IN.
    pub fn address(name: DomainName, ttl: u32, address: IpAddr) -> Self {
        Self::new(name, RecordClass::IN, ttl, RecordData::from(address))
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }
}

/// Zone-file presentation: `name ttl class type rdata`, tab separated.
impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.name,
            self.ttl,
            self.class,
            self.record_type(),
            self.data
        )
    }
}

impl FromStr for ResourceRecord {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        let [name, ttl, class, record_type, rdata] = fields.as_slice() else {
            return Err(DomainError::SerializationFailure(format!(
                "expected 5 fields in record text, found {}: {:?}",
                fields.len(),
                s
            )));
        };

        let name = DomainName::parse(name)
            .map_err(|e| DomainError::SerializationFailure(e.to_string()))?;
        let ttl = ttl
            .parse::<u32>()
            .map_err(|e| DomainError::SerializationFailure(format!("invalid ttl '{}': {}", ttl, e)))?;
        let class = class
            .parse::<RecordClass>()
            .map_err(DomainError::SerializationFailure)?;
        let record_type = record_type
            .parse::<RecordType>()
            .map_err(DomainError::SerializationFailure)?;
        let data = RecordData::parse(record_type, rdata)?;

        Ok(Self::new(name, class, ttl, data))
    }
}
