use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::tsig::TsigConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-dyndns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-dyndns/config.toml";

/// Main configuration structure for the dynamic DNS server
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listening socket and process files
    #[serde(default)]
    pub server: ServerConfig,

    /// Record storage
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Transaction signatures
    #[serde(default)]
    pub tsig: TsigConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-dyndns.toml in current directory
    /// 3. /etc/ferrous-dyndns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(pid_file) = overrides.pid_file {
            self.server.pid_file = Some(pid_file);
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(key) = overrides.tsig_key {
            self.tsig.key = Some(key);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(file) = overrides.log_file {
            self.logging.file = Some(file);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.database.path.is_empty() {
            return Err(ConfigError::Validation(
                "Database path cannot be empty".to_string(),
            ));
        }

        if self.database.read_pool_max_connections == 0 {
            return Err(ConfigError::Validation(
                "read_pool_max_connections must be at least 1".to_string(),
            ));
        }

        self.tsig.key_pair()?;

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub pid_file: Option<String>,
    pub database_path: Option<String>,
    pub tsig_key: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}
