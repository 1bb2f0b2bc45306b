//! Scripted adapter for deterministic tests. No network, no clock.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use lifeline_core::errors::ChannelError;
use lifeline_core::models::{ChannelKind, DeliveryResult};

use crate::ChannelAdapter;

/// What the null adapter does for a given destination.
#[derive(Debug, Clone)]
pub enum NullOutcome {
    /// Report a successful delivery.
    Deliver,
    /// Report a provider-side failure with this error text.
    Reject(String),
    /// Fail the send itself, as if the provider were unreachable.
    Unreachable(String),
}

/// A channel adapter that follows a script instead of talking to a provider.
///
/// Outcomes are keyed by destination so concurrent fan-outs stay
/// deterministic; unscripted destinations get the default outcome.
pub struct NullAdapter {
    channel: ChannelKind,
    name: String,
    default_outcome: NullOutcome,
    scripted: HashMap<String, NullOutcome>,
    delay: Option<Duration>,
    seen: Mutex<Vec<String>>,
}

impl NullAdapter {
    pub fn new(channel: ChannelKind) -> Self {
        Self {
            channel,
            name: format!("null-{}", channel.as_str()),
            default_outcome: NullOutcome::Deliver,
            scripted: HashMap::new(),
            delay: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Script the outcome for one destination.
    pub fn with_outcome(mut self, destination: impl Into<String>, outcome: NullOutcome) -> Self {
        self.scripted.insert(destination.into(), outcome);
        self
    }

    /// Change the default outcome for unscripted destinations.
    pub fn with_default(mut self, outcome: NullOutcome) -> Self {
        self.default_outcome = outcome;
        self
    }

    /// Sleep this long before answering, to exercise timeouts.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Destinations this adapter has been asked to send to, in call order.
    pub fn sent(&self) -> Vec<String> {
        self.seen.lock().expect("null adapter lock").clone()
    }
}

#[async_trait]
impl ChannelAdapter for NullAdapter {
    async fn send(&self, destination: &str, _body: &str) -> Result<DeliveryResult, ChannelError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.seen
            .lock()
            .expect("null adapter lock")
            .push(destination.to_string());

        let outcome = self
            .scripted
            .get(destination)
            .unwrap_or(&self.default_outcome);
        match outcome {
            NullOutcome::Deliver => Ok(DeliveryResult::delivered(Some(format!(
                "{}-{}",
                self.name, destination
            )))),
            NullOutcome::Reject(error) => Ok(DeliveryResult::failed(error.clone())),
            NullOutcome::Unreachable(reason) => Err(ChannelError::ProviderUnavailable {
                provider: self.name.clone(),
                reason: reason.clone(),
            }),
        }
    }

    fn channel(&self) -> ChannelKind {
        self.channel
    }

    fn provider_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rt() -> tokio::runtime::Runtime {
        tokio::runtime::Runtime::new().expect("tokio runtime")
    }

    #[test]
    fn default_outcome_delivers() {
        let adapter = NullAdapter::new(ChannelKind::Sms);
        let result = rt().block_on(adapter.send("9876543210", "hi")).unwrap();
        assert!(result.success);
        assert_eq!(adapter.sent(), vec!["9876543210".to_string()]);
    }

    #[test]
    fn scripted_rejection_reports_failure() {
        let adapter = NullAdapter::new(ChannelKind::Sms)
            .with_outcome("1112223333", NullOutcome::Reject("no credit".into()));
        let result = rt().block_on(adapter.send("1112223333", "hi")).unwrap();
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("no credit"));
    }

    #[test]
    fn scripted_unreachable_is_an_error() {
        let adapter = NullAdapter::new(ChannelKind::Email)
            .with_default(NullOutcome::Unreachable("connection refused".into()));
        let err = rt().block_on(adapter.send("a@b.example", "hi")).unwrap_err();
        assert!(matches!(err, ChannelError::ProviderUnavailable { .. }));
    }
}
