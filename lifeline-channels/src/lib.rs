//! # lifeline-channels
//!
//! One adapter per delivery mechanism. An adapter formats and transmits a
//! single message to a single destination and reports the outcome; it knows
//! nothing about alerts, facilities, or the surrounding dispatch.

pub mod email;
pub mod null;
pub mod sms;

pub use email::EmailAdapter;
pub use null::{NullAdapter, NullOutcome};
pub use sms::{SmsProviderA, SmsProviderB};

use async_trait::async_trait;
use lifeline_core::errors::ChannelError;
use lifeline_core::models::{ChannelKind, DeliveryResult};

/// Uniform send capability implemented by every delivery mechanism.
///
/// `Ok(DeliveryResult { success: false, .. })` means the provider accepted the
/// request but reported a delivery failure; `Err` means the send could not be
/// made at all (bad destination, transport down). Callers treat both as a
/// failed attempt; the distinction exists for diagnostics.
#[async_trait]
pub trait ChannelAdapter: Send + Sync {
    async fn send(&self, destination: &str, body: &str) -> Result<DeliveryResult, ChannelError>;

    fn channel(&self) -> ChannelKind;

    /// Stable provider label recorded on every delivery attempt.
    fn provider_name(&self) -> &str;
}
