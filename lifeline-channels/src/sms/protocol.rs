//! Wire types for the SMS gateway HTTP contract.
//!
//! Both providers accept a POST of `{route, message, numbers}` with an API
//! key header and answer `{return: bool, message}`; they differ in how the
//! destination list is encoded.

use serde::{Deserialize, Serialize};

/// Provider A send request. Destinations are a comma-joined string.
#[derive(Debug, Clone, Serialize)]
pub struct SendRequestA {
    pub route: String,
    pub message: String,
    pub numbers: String,
}

/// Provider B send request. Destinations are a JSON array.
#[derive(Debug, Clone, Serialize)]
pub struct SendRequestB {
    pub route: String,
    pub message: String,
    pub numbers: Vec<String>,
}

/// Gateway response shared by both providers.
#[derive(Debug, Clone, Deserialize)]
pub struct SendResponse {
    /// Provider-side success flag.
    #[serde(rename = "return")]
    pub delivered: bool,
    /// Status text, or the provider's error description verbatim.
    pub message: String,
    /// Gateway message id, when the provider issues one.
    #[serde(default)]
    pub request_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_success_response() {
        let raw = r#"{"return": true, "message": "queued", "request_id": "abc123"}"#;
        let parsed: SendResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.delivered);
        assert_eq!(parsed.request_id.as_deref(), Some("abc123"));
    }

    #[test]
    fn parses_failure_without_request_id() {
        let raw = r#"{"return": false, "message": "Invalid Authentication"}"#;
        let parsed: SendResponse = serde_json::from_str(raw).unwrap();
        assert!(!parsed.delivered);
        assert_eq!(parsed.message, "Invalid Authentication");
        assert!(parsed.request_id.is_none());
    }
}
