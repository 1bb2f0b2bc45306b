//! File-based configuration for the dispatch subsystem.
//!
//! All sections default sensibly so a partial TOML file is valid; credentials
//! and endpoints are never hardcoded in the adapters.

pub mod dispatch_config;
pub mod sms_config;
pub mod smtp_config;

pub use dispatch_config::DispatchConfig;
pub use sms_config::{ActiveSmsProvider, SmsConfig, SmsProviderConfig};
pub use smtp_config::{SmtpConfig, SmtpServerConfig};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Root configuration, loaded once at startup and injected into the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LifelineConfig {
    pub sms: SmsConfig,
    pub smtp: SmtpConfig,
    pub dispatch: DispatchConfig,
}

impl LifelineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[sms]
active_provider = "provider_b"

[dispatch]
send_timeout_secs = 3
"#
        )
        .unwrap();

        let config = LifelineConfig::load(file.path()).unwrap();
        assert_eq!(config.sms.active_provider, ActiveSmsProvider::ProviderB);
        assert_eq!(config.dispatch.send_timeout_secs, 3);
        // Untouched sections keep their defaults.
        assert_eq!(config.smtp.primary.port, 587);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = LifelineConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
