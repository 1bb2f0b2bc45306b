/// Delivery-channel errors.
///
/// `InvalidRecipient` skips that recipient only; `ProviderUnavailable` is
/// logged by the orchestrator and never aborts the surrounding dispatch.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("invalid recipient {recipient:?}: {reason}")]
    InvalidRecipient { recipient: String, reason: String },

    #[error("provider {provider} unavailable: {reason}")]
    ProviderUnavailable { provider: String, reason: String },

    #[error("message could not be built: {reason}")]
    MalformedMessage { reason: String },
}
