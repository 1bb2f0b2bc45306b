//! Secondary SMS gateway adapter.

use async_trait::async_trait;
use lifeline_core::config::SmsProviderConfig;
use lifeline_core::errors::ChannelError;
use lifeline_core::models::{ChannelKind, DeliveryResult};

use super::protocol::{SendRequestB, SendResponse};
use super::normalize_msisdn;
use crate::ChannelAdapter;

const PROVIDER_NAME: &str = "sms-provider-b";

/// Adapter for the secondary SMS gateway. Same contract as provider A except
/// the destination list is a JSON array.
#[derive(Debug)]
pub struct SmsProviderB {
    config: SmsProviderConfig,
    client: reqwest::Client,
}

impl SmsProviderB {
    pub fn new(config: SmsProviderConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ChannelAdapter for SmsProviderB {
    async fn send(&self, destination: &str, body: &str) -> Result<DeliveryResult, ChannelError> {
        let msisdn = normalize_msisdn(destination)?;
        let request = SendRequestB {
            route: self.config.route.clone(),
            message: body.to_string(),
            numbers: vec![msisdn.clone()],
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(&self.config.api_key_header, &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ChannelError::ProviderUnavailable {
                provider: PROVIDER_NAME.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ChannelError::ProviderUnavailable {
                provider: PROVIDER_NAME.to_string(),
                reason: e.to_string(),
            })?;

        if !status.is_success() {
            return Ok(DeliveryResult::failed(format!("HTTP {status}: {text}")));
        }

        match serde_json::from_str::<SendResponse>(&text) {
            Ok(parsed) if parsed.delivered => {
                tracing::debug!(to = %msisdn, "sms-b: accepted by gateway");
                Ok(DeliveryResult::delivered(parsed.request_id))
            }
            Ok(parsed) => Ok(DeliveryResult::failed(parsed.message)),
            Err(_) => Ok(DeliveryResult::failed(format!(
                "unrecognized gateway response: {text}"
            ))),
        }
    }

    fn channel(&self) -> ChannelKind {
        ChannelKind::Sms
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}
