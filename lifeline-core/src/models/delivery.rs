//! Delivery attempt records and channel result types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Delivery mechanism of a channel adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    Sms,
    Email,
}

impl ChannelKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sms => "sms",
            Self::Email => "email",
        }
    }
}

/// What a channel adapter reports for a single send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryResult {
    pub success: bool,
    pub provider_message_id: Option<String>,
    /// Provider error text, preserved verbatim for diagnostics.
    pub error: Option<String>,
}

impl DeliveryResult {
    pub fn delivered(provider_message_id: Option<String>) -> Self {
        Self {
            success: true,
            provider_message_id,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            provider_message_id: None,
            error: Some(error.into()),
        }
    }
}

/// One attempted send, success or failure. Append-only, never mutated; the
/// sole basis for the delivery audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryAttempt {
    pub alert_id: Uuid,
    pub channel: ChannelKind,
    pub recipient: String,
    pub provider: Option<String>,
    pub success: bool,
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl DeliveryAttempt {
    pub fn succeeded(
        alert_id: Uuid,
        channel: ChannelKind,
        recipient: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            alert_id,
            channel,
            recipient: recipient.into(),
            provider: Some(provider.into()),
            success: true,
            error: None,
            timestamp: Utc::now(),
        }
    }

    pub fn failed(
        alert_id: Uuid,
        channel: ChannelKind,
        recipient: impl Into<String>,
        provider: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            alert_id,
            channel,
            recipient: recipient.into(),
            provider: Some(provider.into()),
            success: false,
            error: Some(error.into()),
            timestamp: Utc::now(),
        }
    }
}

/// Aggregated outcome of one dispatch fan-out.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DispatchResult {
    pub sms_success: bool,
    pub email_success: bool,
    pub attempts: Vec<DeliveryAttempt>,
}

impl DispatchResult {
    /// A dispatch counts as delivered when any channel reached the facility.
    pub fn overall_success(&self) -> bool {
        self.sms_success || self.email_success
    }

    /// Count of failed attempts across all channels.
    pub fn failure_count(&self) -> usize {
        self.attempts.iter().filter(|a| !a.success).count()
    }
}
