//! DispatchEngine: concurrent fan-out across recipients and channels, full
//! fan-in, failure audit logging.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use lifeline_channels::{ChannelAdapter, EmailAdapter, SmsProviderA, SmsProviderB};
use lifeline_core::config::{ActiveSmsProvider, DispatchConfig, LifelineConfig};
use lifeline_core::errors::ChannelError;
use lifeline_core::models::{DeliveryAttempt, DispatchResult, EmergencyAlert, Facility};

use crate::logger::DeliveryLog;
use crate::message::AlertMessage;
use crate::metrics::DispatchMetrics;

/// The notification orchestrator.
///
/// Holds the active SMS adapter (chosen once per deployment from
/// configuration), the email adapter, the failure log, and counters. One
/// engine serves all dispatches; adapters are stateless beyond their
/// configuration.
pub struct DispatchEngine {
    sms: Arc<dyn ChannelAdapter>,
    email: Arc<dyn ChannelAdapter>,
    log: Arc<DeliveryLog>,
    metrics: Arc<DispatchMetrics>,
    send_timeout: Duration,
}

impl DispatchEngine {
    /// Create an engine with explicit adapters.
    pub fn new(
        sms: Arc<dyn ChannelAdapter>,
        email: Arc<dyn ChannelAdapter>,
        log: Arc<DeliveryLog>,
        config: &DispatchConfig,
    ) -> Self {
        Self {
            sms,
            email,
            log,
            metrics: Arc::new(DispatchMetrics::new()),
            send_timeout: config.send_timeout(),
        }
    }

    /// Build the production engine: resolve the active SMS provider and the
    /// SMTP transports from configuration.
    pub fn from_config(config: &LifelineConfig) -> Result<Self, ChannelError> {
        let sms: Arc<dyn ChannelAdapter> = match config.sms.active_provider {
            ActiveSmsProvider::ProviderA => {
                Arc::new(SmsProviderA::new(config.sms.provider_a.clone()))
            }
            ActiveSmsProvider::ProviderB => {
                Arc::new(SmsProviderB::new(config.sms.provider_b.clone()))
            }
        };
        let email: Arc<dyn ChannelAdapter> = Arc::new(EmailAdapter::new(config.smtp.clone())?);
        let log = Arc::new(DeliveryLog::new(config.dispatch.delivery_log_path.clone()));
        Ok(Self::new(sms, email, log, &config.dispatch))
    }

    /// Override the per-send timeout.
    pub fn with_send_timeout(mut self, timeout: Duration) -> Self {
        self.send_timeout = timeout;
        self
    }

    pub fn metrics(&self) -> &DispatchMetrics {
        &self.metrics
    }

    pub fn delivery_log(&self) -> &DeliveryLog {
        &self.log
    }

    /// Fan out the alert to the facility and wait for every send to settle.
    ///
    /// The email send runs concurrently with the SMS fan-out; each send has
    /// an independent timeout so one slow provider cannot stall the others.
    /// There is no short-circuit on first success: every recipient is
    /// attempted and recorded, so the audit trail is complete. Total failure
    /// is reported in the result, never thrown; the lifecycle manager decides
    /// what status to assign.
    pub async fn dispatch(&self, alert: &EmergencyAlert, facility: &Facility) -> DispatchResult {
        tracing::info!(
            alert_id = %alert.id,
            facility = %facility.id,
            recipients = facility.emergency_contacts.len(),
            has_email = facility.email.is_some(),
            "dispatch: starting fan-out"
        );
        let message = AlertMessage::render(alert, facility);

        let email_task = self.send_email(alert.id, facility, &message);
        let sms_task = self.fan_out_sms(alert.id, &facility.emergency_contacts, &message);
        let (email_attempt, sms_attempts) = tokio::join!(email_task, sms_task);

        let email_success = email_attempt.as_ref().is_some_and(|a| a.success);
        let sms_success = sms_attempts.iter().any(|a| a.success);

        let mut attempts = Vec::with_capacity(sms_attempts.len() + 1);
        if let Some(attempt) = email_attempt {
            self.metrics.record_email(attempt.success);
            if !attempt.success {
                self.log_failure_best_effort(&attempt, &message.html_body)
                    .await;
            }
            attempts.push(attempt);
        }
        for attempt in sms_attempts {
            self.metrics.record_sms(attempt.success);
            if !attempt.success {
                self.log_failure_best_effort(&attempt, &message.sms_body)
                    .await;
            }
            attempts.push(attempt);
        }

        let result = DispatchResult {
            sms_success,
            email_success,
            attempts,
        };
        if result.overall_success() {
            tracing::info!(
                alert_id = %alert.id,
                failures = result.failure_count(),
                "dispatch: at least one channel delivered"
            );
        } else {
            tracing::warn!(
                alert_id = %alert.id,
                attempts = result.attempts.len(),
                "dispatch: every channel failed"
            );
        }
        result
    }

    /// Attempt the email channel once, iff the facility has an address.
    async fn send_email(
        &self,
        alert_id: Uuid,
        facility: &Facility,
        message: &AlertMessage,
    ) -> Option<DeliveryAttempt> {
        let address = facility.email.as_deref()?;
        Some(
            send_with_timeout(
                Arc::clone(&self.email),
                self.send_timeout,
                alert_id,
                address.to_string(),
                message.html_body.clone(),
            )
            .await,
        )
    }

    /// One concurrent send per emergency contact.
    ///
    /// Failure for one recipient never disqualifies the provider for the
    /// others; there is no blacklisting within a dispatch. Every recipient
    /// yields exactly one attempt record, even if its send task dies before
    /// producing one.
    async fn fan_out_sms(
        &self,
        alert_id: Uuid,
        recipients: &[String],
        message: &AlertMessage,
    ) -> Vec<DeliveryAttempt> {
        let handles: Vec<_> = recipients
            .iter()
            .map(|recipient| {
                let adapter = Arc::clone(&self.sms);
                let recipient = recipient.clone();
                let body = message.sms_body.clone();
                let timeout = self.send_timeout;
                tokio::spawn(send_with_timeout(adapter, timeout, alert_id, recipient, body))
            })
            .collect();

        // All tasks are in flight; awaiting the handles in order keeps the
        // audit trail in recipient order.
        let mut attempts = Vec::with_capacity(recipients.len());
        for (recipient, handle) in recipients.iter().zip(handles) {
            let attempt = match handle.await {
                Ok(attempt) => attempt,
                Err(e) => {
                    tracing::warn!(
                        alert_id = %alert_id,
                        recipient = %recipient,
                        error = %e,
                        "dispatch: send task aborted"
                    );
                    DeliveryAttempt::failed(
                        alert_id,
                        self.sms.channel(),
                        recipient.clone(),
                        self.sms.provider_name(),
                        format!("send task aborted: {e}"),
                    )
                }
            };
            attempts.push(attempt);
        }
        attempts
    }

    /// Best effort: a failed log write must not disturb the dispatch outcome.
    async fn log_failure_best_effort(&self, attempt: &DeliveryAttempt, body: &str) {
        if let Err(e) = self.log.record_failure(attempt, body).await {
            self.metrics.record_log_write_failure();
            tracing::warn!(
                alert_id = %attempt.alert_id,
                recipient = %attempt.recipient,
                error = %e,
                "dispatch: failed to persist delivery failure record"
            );
        }
    }
}

/// Run one adapter send under its own timeout and fold the outcome into a
/// delivery attempt record.
async fn send_with_timeout(
    adapter: Arc<dyn ChannelAdapter>,
    timeout: Duration,
    alert_id: Uuid,
    recipient: String,
    body: String,
) -> DeliveryAttempt {
    let channel = adapter.channel();
    let provider = adapter.provider_name().to_string();
    match tokio::time::timeout(timeout, adapter.send(&recipient, &body)).await {
        Ok(Ok(result)) if result.success => {
            DeliveryAttempt::succeeded(alert_id, channel, recipient, provider)
        }
        Ok(Ok(result)) => DeliveryAttempt::failed(
            alert_id,
            channel,
            recipient,
            provider,
            result
                .error
                .unwrap_or_else(|| "provider reported failure".to_string()),
        ),
        Ok(Err(e)) => DeliveryAttempt::failed(alert_id, channel, recipient, provider, e.to_string()),
        Err(_) => DeliveryAttempt::failed(
            alert_id,
            channel,
            recipient,
            provider,
            format!("send timed out after {:?}", timeout),
        ),
    }
}
