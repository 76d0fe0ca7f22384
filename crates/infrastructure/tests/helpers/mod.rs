#![allow(dead_code)]

use ferrous_dyndns_application::ports::RecordStore;
use ferrous_dyndns_application::use_cases::{
    ApplyUpdateUseCase, HandleDnsMessageUseCase, ResolveQueryUseCase,
};
use ferrous_dyndns_infrastructure::database::create_bucket;
use ferrous_dyndns_infrastructure::dns::{DnsMessageHandler, TsigKey};
use ferrous_dyndns_infrastructure::repositories::SqliteRecordStore;
use hickory_proto::dnssec::rdata::tsig::TsigAlgorithm;
use hickory_proto::dnssec::tsig::TSigner;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{rdata, DNSClass, Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use sqlx::sqlite::SqlitePoolOptions;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

pub const CLIENT: &str = "192.0.2.200:5353";
pub const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

pub fn client() -> SocketAddr {
    CLIENT.parse().unwrap()
}

pub async fn memory_store() -> Arc<SqliteRecordStore> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    create_bucket(&pool).await.unwrap();
    Arc::new(SqliteRecordStore::new(pool))
}

pub fn handler(store: Arc<SqliteRecordStore>, key: Option<TsigKey>) -> DnsMessageHandler {
    let store: Arc<dyn RecordStore> = store;
    let use_case = HandleDnsMessageUseCase::new(
        Arc::new(ApplyUpdateUseCase::new(store.clone())),
        Arc::new(ResolveQueryUseCase::new(store)),
    );
    DnsMessageHandler::new(Arc::new(use_case), key)
}

pub fn test_key() -> TsigKey {
    TsigKey::new("update-key.", SECRET).unwrap()
}

/// Client side signer, as a hickory based updater would hold it.
pub fn client_signer(secret: &[u8]) -> TSigner {
    TSigner::new(secret.to_vec(), TsigAlgorithm::HmacSha256, name("update-key."), 300).unwrap()
}

pub fn sign(mut message: Message, signer: &TSigner, now: u64) -> Vec<u8> {
    message.finalize(signer, now as u32).unwrap();
    encode(&message)
}

pub fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

pub fn encode(message: &Message) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}

pub fn query_message(id: u16, domain: &str, record_type: RecordType) -> Vec<u8> {
    let mut query = Query::new();
    query.set_name(name(domain));
    query.set_query_type(record_type);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);
    encode(&message)
}

pub fn update_message(id: u16, zone: &str, records: Vec<Record>) -> Vec<u8> {
    encode(&update_request(id, zone, records))
}

pub fn update_request(id: u16, zone: &str, records: Vec<Record>) -> Message {
    let mut query = Query::new();
    query.set_name(name(zone));
    query.set_query_type(RecordType::SOA);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new(id, MessageType::Query, OpCode::Update);
    message.add_query(query);
    for record in records {
        message.add_name_server(record);
    }
    message
}

pub fn a_record(domain: &str, ttl: u32, addr: &str) -> Record {
    Record::from_rdata(name(domain), ttl, RData::A(rdata::A(addr.parse().unwrap())))
}

pub fn aaaa_record(domain: &str, ttl: u32, addr: &str) -> Record {
    Record::from_rdata(
        name(domain),
        ttl,
        RData::AAAA(rdata::AAAA(addr.parse().unwrap())),
    )
}

/// Class ANY, empty rdata: delete every record of `record_type`.
pub fn delete_all_record(domain: &str, record_type: RecordType) -> Record {
    let mut record = Record::update0(name(domain), 0, record_type);
    record.set_dns_class(DNSClass::ANY);
    record
}
