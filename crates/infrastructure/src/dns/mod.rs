pub mod record_mapper;
pub mod server;
pub mod tsig;

pub use record_mapper::RecordMapper;
pub use server::DnsMessageHandler;
pub use tsig::{TsigError, TsigKey};
