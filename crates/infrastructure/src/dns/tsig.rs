//! TSIG (RFC 8945) keys on top of hickory's `TSigner`.
//!
//! Only `hmac-sha256` is accepted. Requests are checked against the fudge
//! they carry; replies are signed with `FUDGE_SECS` and chained to the
//! request MAC.

use base64::Engine;
use hickory_proto::dnssec::rdata::tsig::{make_tsig_record, message_tbs, TsigAlgorithm, TSIG};
use hickory_proto::dnssec::tsig::TSigner;
use hickory_proto::dnssec::{DnsSecError, DnsSecErrorKind};
use hickory_proto::op::{Message, MessageSignature};
use hickory_proto::rr::Name;
use thiserror::Error;

pub const FUDGE_SECS: u16 = 300;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TsigError {
    #[error("Invalid TSIG key name '{0}': {1}")]
    InvalidKeyName(String, String),

    #[error("Invalid TSIG secret: {0}")]
    InvalidSecret(String),

    #[error("Unknown TSIG key or algorithm")]
    WrongKey,

    #[error("TSIG verification failed: {0}")]
    Rejected(String),

    #[error("TSIG time {signed} outside fudge window at {now}")]
    BadTime { signed: u64, now: u64 },

    #[error("Failed to sign message: {0}")]
    Signing(String),
}

impl From<DnsSecError> for TsigError {
    fn from(e: DnsSecError) -> Self {
        match e.kind() {
            DnsSecErrorKind::TsigWrongKey => TsigError::WrongKey,
            _ => TsigError::Rejected(e.to_string()),
        }
    }
}

/// Shared secret for one key name.
#[derive(Clone)]
pub struct TsigKey {
    signer: TSigner,
}

impl std::fmt::Debug for TsigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TsigKey")
            .field("name", self.signer.signer_name())
            .finish()
    }
}

impl TsigKey {
    pub fn new(name: &str, secret: &[u8]) -> Result<Self, TsigError> {
        let key_name = Name::from_ascii(name)
            .map_err(|e| TsigError::InvalidKeyName(name.to_string(), e.to_string()))?;
        let signer = TSigner::new(
            secret.to_vec(),
            TsigAlgorithm::HmacSha256,
            key_name,
            FUDGE_SECS,
        )
        .map_err(|e| TsigError::InvalidSecret(e.to_string()))?;

        Ok(Self { signer })
    }

    /// `secret` is base64, as written in `keyname:secret`.
    pub fn from_base64(name: &str, secret: &str) -> Result<Self, TsigError> {
        let secret = base64::engine::general_purpose::STANDARD
            .decode(secret.trim())
            .map_err(|e| TsigError::InvalidSecret(e.to_string()))?;
        Self::new(name, &secret)
    }

    pub fn name(&self) -> &Name {
        self.signer.signer_name()
    }

    /// Check the TSIG RR at the end of `datagram`. Returns the request MAC,
    /// which the reply signature is chained to.
    pub fn verify(&self, datagram: &[u8], now: u64) -> Result<Vec<u8>, TsigError> {
        let (mac, signed, window) = self.signer.verify_message_byte(datagram, None, true)?;

        if now < window.start || now > window.end {
            return Err(TsigError::BadTime { signed, now });
        }

        Ok(mac)
    }

    /// Attach a TSIG RR to `reply`. `request_mac` is the MAC returned by
    /// `verify` for the request being answered.
    pub fn sign(
        &self,
        reply: &mut Message,
        request_mac: Option<&[u8]>,
        now: u64,
    ) -> Result<(), TsigError> {
        let pre_tsig = TSIG::new(
            TsigAlgorithm::HmacSha256,
            now,
            FUDGE_SECS,
            Vec::new(),
            reply.id(),
            0,
            Vec::new(),
        );

        let mut tbs = Vec::with_capacity(512);
        if let Some(mac) = request_mac {
            tbs.extend_from_slice(&(mac.len() as u16).to_be_bytes());
            tbs.extend_from_slice(mac);
        }
        let body = message_tbs(reply, &pre_tsig, self.signer.signer_name())
            .map_err(|e| TsigError::Signing(e.to_string()))?;
        tbs.extend_from_slice(&body);

        let mac = self.signer.sign(&tbs)?;
        let record = make_tsig_record(self.signer.signer_name().clone(), pre_tsig.set_mac(mac));
        reply.set_signature(MessageSignature::Tsig(record));

        Ok(())
    }
}
