pub mod dns;
pub mod records;

pub use dns::{DnsReply, HandleDnsMessageUseCase, UpdateReport};
pub use records::{ApplyUpdateUseCase, ResolveQueryUseCase};
