//! Conversions between hickory wire types and the domain message model.

use ferrous_dyndns_domain::{
    DnsMessage, DomainError, Opcode, Question, RecordClass, RecordData, RecordType,
    ResourceRecord, UpdateData, UpdateRecord,
};
use hickory_proto::op::{Message, OpCode, Query};
use hickory_proto::rr::{rdata, Name, RData, Record};
use std::str::FromStr;

pub struct RecordMapper;

impl RecordMapper {
    /// Question and authority sections of a parsed message. For UPDATE the
    /// question section is the zone section and authority is the update
    /// section.
    pub fn message_from_hickory(message: &Message) -> DnsMessage {
        DnsMessage {
            opcode: Self::opcode_from_hickory(message.op_code()),
            questions: message
                .queries()
                .iter()
                .map(Self::question_from_hickory)
                .collect(),
            authority: message
                .name_servers()
                .iter()
                .map(Self::update_from_hickory)
                .collect(),
        }
    }

    pub fn opcode_from_hickory(op_code: OpCode) -> Opcode {
        match op_code {
            OpCode::Query => Opcode::Query,
            OpCode::Update => Opcode::Update,
            other => Opcode::Other(u8::from(other)),
        }
    }

    pub fn question_from_hickory(query: &Query) -> Question {
        Question::new(
            query.name().to_ascii(),
            RecordType::from_u16(u16::from(query.query_type())),
        )
    }

    pub fn update_from_hickory(record: &Record) -> UpdateRecord {
        let data = match record.data() {
            RData::A(a) => UpdateData::Address(RecordData::A(a.0)),
            RData::AAAA(aaaa) => UpdateData::Address(RecordData::AAAA(aaaa.0)),
            // zero-length rdata (RFC 2136 delete forms)
            RData::Update0(_) => UpdateData::Empty,
            _ => UpdateData::Opaque,
        };

        UpdateRecord {
            name: record.name().to_ascii(),
            record_type: RecordType::from_u16(u16::from(record.record_type())),
            class: RecordClass::from_u16(u16::from(record.dns_class())),
            ttl: record.ttl(),
            data,
        }
    }

    pub fn record_to_hickory(record: &ResourceRecord) -> Result<Record, DomainError> {
        let name = Name::from_str(record.name.as_str()).map_err(|e| {
            DomainError::InvalidName(format!("Invalid owner name '{}': {}", record.name, e))
        })?;

        let rdata = match record.data {
            RecordData::A(ip) => RData::A(rdata::A(ip)),
            RecordData::AAAA(ip) => RData::AAAA(rdata::AAAA(ip)),
        };

        Ok(Record::from_rdata(name, record.ttl, rdata))
    }
}
