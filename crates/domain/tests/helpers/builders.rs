#![allow(dead_code)]
use ferrous_dyndns_domain::{RecordClass, RecordData, RecordType, UpdateData, UpdateRecord};
use std::net::IpAddr;
use std::str::FromStr;

pub struct UpdateRecordBuilder {
    name: String,
    record_type: RecordType,
    class: RecordClass,
    ttl: u32,
    data: UpdateData,
}

impl UpdateRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "host.example.com.".to_string(),
            record_type: RecordType::A,
            class: RecordClass::IN,
            ttl: 300,
            data: UpdateData::Address(RecordData::from(IpAddr::from_str("192.0.2.1").unwrap())),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn class(mut self, class: RecordClass) -> Self {
        self.class = class;
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        let data = RecordData::from(IpAddr::from_str(address).unwrap());
        self.record_type = data.record_type();
        self.data = UpdateData::Address(data);
        self
    }

    pub fn delete_all(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self.class = RecordClass::ANY;
        self.ttl = 0;
        self.data = UpdateData::Empty;
        self
    }

    pub fn opaque(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self.data = UpdateData::Opaque;
        self
    }

    pub fn build(self) -> UpdateRecord {
        UpdateRecord {
            name: self.name,
            record_type: self.record_type,
            class: self.class,
            ttl: self.ttl,
            data: self.data,
        }
    }
}

impl Default for UpdateRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
