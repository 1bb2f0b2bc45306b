//! SMTP transport configuration for the email channel.

use serde::{Deserialize, Serialize};

/// One SMTP submission endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpServerConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl Default for SmtpServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 587,
            username: String::new(),
            password: String::new(),
        }
    }
}

/// Email channel configuration.
///
/// The fallback transport, when present, is tried once after the primary
/// fails. That retry is local policy of the email adapter and unrelated to
/// SMS provider failover.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpConfig {
    pub primary: SmtpServerConfig,
    pub fallback: Option<SmtpServerConfig>,
    pub from_address: String,
    pub subject: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            primary: SmtpServerConfig::default(),
            fallback: None,
            from_address: "alerts@lifeline.example".to_string(),
            subject: "EMERGENCY SOS ALERT".to_string(),
        }
    }
}
