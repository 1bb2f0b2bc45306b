//! SMTP email adapter.
//!
//! Builds a multipart MIME message (HTML plus a derived plain-text fallback)
//! and submits it over the configured transport. A primary-transport failure
//! is retried once on the fallback transport before the failure surfaces;
//! that retry is local to this adapter and unrelated to SMS provider
//! failover.

pub mod html;

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use lifeline_core::config::{SmtpConfig, SmtpServerConfig};
use lifeline_core::errors::ChannelError;
use lifeline_core::models::{ChannelKind, DeliveryResult};

use crate::ChannelAdapter;

const PROVIDER_NAME: &str = "smtp";

/// Email channel adapter.
pub struct EmailAdapter {
    config: SmtpConfig,
    from: Mailbox,
    primary: AsyncSmtpTransport<Tokio1Executor>,
    fallback: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

impl EmailAdapter {
    /// Build the adapter and both transports from configuration.
    pub fn new(config: SmtpConfig) -> Result<Self, ChannelError> {
        let from = config
            .from_address
            .parse::<Mailbox>()
            .map_err(|e| ChannelError::MalformedMessage {
                reason: format!("bad from address {:?}: {e}", config.from_address),
            })?;
        let primary = build_transport(&config.primary)?;
        let fallback = config
            .fallback
            .as_ref()
            .map(build_transport)
            .transpose()?;
        Ok(Self {
            config,
            from,
            primary,
            fallback,
        })
    }

    fn build_message(&self, to: &Mailbox, body: &str) -> Result<Message, ChannelError> {
        let plain = html::html_to_text(body);
        Message::builder()
            .from(self.from.clone())
            .to(to.clone())
            .subject(self.config.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                plain,
                body.to_string(),
            ))
            .map_err(|e| ChannelError::MalformedMessage {
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl ChannelAdapter for EmailAdapter {
    async fn send(&self, destination: &str, body: &str) -> Result<DeliveryResult, ChannelError> {
        let to = destination
            .parse::<Mailbox>()
            .map_err(|e| ChannelError::InvalidRecipient {
                recipient: destination.to_string(),
                reason: e.to_string(),
            })?;

        let message = self.build_message(&to, body)?;
        let primary_err = match self.primary.send(message).await {
            Ok(response) => {
                return Ok(DeliveryResult::delivered(Some(format!(
                    "smtp {}",
                    response.code()
                ))));
            }
            Err(e) => e,
        };

        let Some(fallback) = &self.fallback else {
            return Err(ChannelError::ProviderUnavailable {
                provider: PROVIDER_NAME.to_string(),
                reason: primary_err.to_string(),
            });
        };

        tracing::warn!(
            error = %primary_err,
            "email: primary transport failed, retrying on fallback"
        );
        let message = self.build_message(&to, body)?;
        match fallback.send(message).await {
            Ok(response) => Ok(DeliveryResult::delivered(Some(format!(
                "smtp {}",
                response.code()
            )))),
            Err(fallback_err) => Err(ChannelError::ProviderUnavailable {
                provider: PROVIDER_NAME.to_string(),
                reason: format!("primary: {primary_err}; fallback: {fallback_err}"),
            }),
        }
    }

    fn channel(&self) -> ChannelKind {
        ChannelKind::Email
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}

fn build_transport(
    server: &SmtpServerConfig,
) -> Result<AsyncSmtpTransport<Tokio1Executor>, ChannelError> {
    let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&server.host)
        .map_err(|e| ChannelError::ProviderUnavailable {
            provider: PROVIDER_NAME.to_string(),
            reason: format!("transport setup for {}: {e}", server.host),
        })?
        .port(server.port);
    if !server.username.is_empty() {
        builder = builder.credentials(Credentials::new(
            server.username.clone(),
            server.password.clone(),
        ));
    }
    Ok(builder.build())
}
