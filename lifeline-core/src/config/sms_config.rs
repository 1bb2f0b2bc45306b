//! SMS provider configuration and active-provider selection.

use serde::{Deserialize, Serialize};

/// Which SMS provider handles outbound sends for this deployment.
///
/// Selected once per deployment, not per call; the orchestrator receives the
/// resolved adapter at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveSmsProvider {
    ProviderA,
    ProviderB,
}

/// Connection settings for one SMS provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmsProviderConfig {
    /// HTTPS endpoint accepting the `{route, message, numbers}` POST.
    pub endpoint: String,
    /// Header carrying the API key.
    pub api_key_header: String,
    pub api_key: String,
    /// Provider-side message route (e.g. transactional vs promotional).
    pub route: String,
}

impl Default for SmsProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://sms.example.com/v2/send".to_string(),
            api_key_header: "authorization".to_string(),
            api_key: String::new(),
            route: "emergency".to_string(),
        }
    }
}

/// SMS channel configuration: two competing providers plus the active choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmsConfig {
    pub active_provider: ActiveSmsProvider,
    pub provider_a: SmsProviderConfig,
    pub provider_b: SmsProviderConfig,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            active_provider: ActiveSmsProvider::ProviderA,
            provider_a: SmsProviderConfig::default(),
            provider_b: SmsProviderConfig {
                endpoint: "https://gateway.example.net/bulk/send".to_string(),
                ..SmsProviderConfig::default()
            },
        }
    }
}
