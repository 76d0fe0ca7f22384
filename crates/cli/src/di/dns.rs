use super::UseCases;
use ferrous_dyndns_domain::Config;
use ferrous_dyndns_infrastructure::dns::{DnsMessageHandler, TsigKey};
use tracing::info;

pub struct DnsServices {
    pub handler: DnsMessageHandler,
}

impl DnsServices {
    pub fn new(config: &Config, use_cases: &UseCases) -> anyhow::Result<Self> {
        let tsig_key = match config.tsig.key_pair()? {
            Some((name, secret)) => {
                let key = TsigKey::from_base64(&name, &secret)?;
                info!(key = %key.name(), "TSIG enabled");
                Some(key)
            }
            None => {
                info!("TSIG disabled, signed messages will be dropped");
                None
            }
        };

        Ok(Self {
            handler: DnsMessageHandler::new(use_cases.handle_dns_message.clone(), tsig_key),
        })
    }
}
