use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TsigConfig {
    /// Pre-shared key as `keyname:base64secret`.
    #[serde(default)]
    pub key: Option<String>,
}

impl TsigConfig {
    /// Split the configured key into `(name, secret)`. The name is returned
    /// fully qualified.
    pub fn key_pair(&self) -> Result<Option<(String, String)>, ConfigError> {
        let Some(raw) = self.key.as_deref() else {
            return Ok(None);
        };

        let (name, secret) = raw.split_once(':').ok_or_else(|| {
            ConfigError::Validation("TSIG key must be given as keyname:base64secret".to_string())
        })?;

        if name.is_empty() || secret.is_empty() {
            return Err(ConfigError::Validation(
                "TSIG key name and secret must not be empty".to_string(),
            ));
        }

        let name = if name.ends_with('.') {
            name.to_string()
        } else {
            format!("{}.", name)
        };

        Ok(Some((name, secret.to_string())))
    }
}
