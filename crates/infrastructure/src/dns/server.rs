use crate::dns::record_mapper::RecordMapper;
use crate::dns::tsig::TsigKey;
use ferrous_dyndns_application::use_cases::{DnsReply, HandleDnsMessageUseCase};
use ferrous_dyndns_domain::{DomainError, Opcode, ResourceRecord};
use hickory_proto::op::{Message, MessageSignature, MessageType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Per-datagram entry point: bytes in, optional reply bytes out.
pub struct DnsMessageHandler {
    use_case: Arc<HandleDnsMessageUseCase>,
    tsig_key: Option<Arc<TsigKey>>,
}

impl DnsMessageHandler {
    pub fn new(use_case: Arc<HandleDnsMessageUseCase>, tsig_key: Option<TsigKey>) -> Self {
        Self {
            use_case,
            tsig_key: tsig_key.map(Arc::new),
        }
    }

    pub async fn handle(&self, datagram: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        self.handle_at(datagram, client, unix_now()).await
    }

    /// `handle` with an explicit clock, in seconds since the epoch.
    pub async fn handle_at(
        &self,
        datagram: &[u8],
        client: SocketAddr,
        now: u64,
    ) -> Option<Vec<u8>> {
        let request = match Message::from_vec(datagram) {
            Ok(message) => message,
            Err(e) => {
                debug!(client = %client, error = %e, "Failed to parse DNS message");
                return None;
            }
        };

        let request_mac = match (request.signature(), &self.tsig_key) {
            (MessageSignature::Unsigned, _) => None,
            (MessageSignature::Tsig(record), None) => {
                warn!(
                    client = %client,
                    key = %record.name(),
                    "Signed message received but no TSIG key is configured"
                );
                return None;
            }
            (MessageSignature::Tsig(_), Some(key)) => match key.verify(datagram, now) {
                Ok(mac) => Some(mac),
                Err(e) => {
                    warn!(client = %client, error = %e, "TSIG verification failed, message dropped");
                    return None;
                }
            },
            (MessageSignature::Sig0(_), _) => {
                warn!(client = %client, "SIG(0) signed message dropped");
                return None;
            }
        };

        if request.message_type() != MessageType::Query {
            debug!(client = %client, "Ignoring DNS response");
            return None;
        }

        let message = RecordMapper::message_from_hickory(&request);

        if message.opcode == Opcode::Update {
            info!(
                client = %client,
                zone = ?message.questions.first().map(|q| q.name.as_str()),
                records = message.authority.len(),
                signed = request_mac.is_some(),
                "DNS UPDATE received"
            );
        }

        let answers = match self.use_case.execute(&message).await {
            DnsReply::Answer(records) => records,
            DnsReply::Updated(_) => Vec::new(),
            DnsReply::Unsupported(_) => return None,
        };

        let mut reply = build_reply(&request, &answers);

        if let (Some(mac), Some(key)) = (&request_mac, &self.tsig_key) {
            if let Err(e) = key.sign(&mut reply, Some(mac), now) {
                error!(error = %e, "Failed to sign reply");
                return None;
            }
        }

        match encode(&reply) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(error = %e, "Failed to build reply");
                None
            }
        }
    }
}

/// Same id and opcode, authoritative, RD copied, questions echoed.
fn build_reply(request: &Message, answers: &[ResourceRecord]) -> Message {
    let mut reply = Message::new(request.id(), MessageType::Response, request.op_code());
    reply.set_authoritative(true);
    reply.set_recursion_desired(request.recursion_desired());

    for query in request.queries() {
        reply.add_query(query.clone());
    }

    for rr in answers {
        match RecordMapper::record_to_hickory(rr) {
            Ok(record) => {
                reply.add_answer(record);
            }
            Err(e) => warn!(error = %e, "Answer record left out of reply"),
        }
    }

    reply
}

fn encode(reply: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    reply
        .emit(&mut encoder)
        .map_err(|e| DomainError::SerializationFailure(format!("Failed to encode reply: {}", e)))?;

    Ok(buf)
}

fn unix_now() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}
