use crate::{RecordClass, RecordData, RecordType};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Query,
    Update,
    Other(u8),
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opcode::Query => f.write_str("QUERY"),
            Opcode::Update => f.write_str("UPDATE"),
            Opcode::Other(code) => write!(f, "OPCODE{}", code),
        }
    }
}

/// A question as it arrived on the wire. The name is not validated yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub record_type: RecordType,
}

impl Question {
    pub fn new(name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }
}

/// Payload of an update record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateData {
    /// Zero-length rdata.
    Empty,
    Address(RecordData),
    /// Rdata of a type this server does not manage.
    Opaque,
}

/// One record from the authority (update) section of an UPDATE message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRecord {
    pub name: String,
    pub record_type: RecordType,
    pub class: RecordClass,
    pub ttl: u32,
    pub data: UpdateData,
}

impl UpdateRecord {
    /// Class ANY with empty rdata: delete every record of this type.
    pub fn is_delete_all(&self) -> bool {
        self.class == RecordClass::ANY && self.data == UpdateData::Empty
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsMessage {
    pub opcode: Opcode,
    pub questions: Vec<Question>,
    pub authority: Vec<UpdateRecord>,
}

impl DnsMessage {
    pub fn query(questions: Vec<Question>) -> Self {
        Self {
            opcode: Opcode::Query,
            questions,
            authority: Vec::new(),
        }
    }

    pub fn update(zone: Question, authority: Vec<UpdateRecord>) -> Self {
        Self {
            opcode: Opcode::Update,
            questions: vec![zone],
            authority,
        }
    }
}
