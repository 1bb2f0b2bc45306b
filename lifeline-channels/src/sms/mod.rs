//! SMS adapters for the two competing gateway providers.

pub mod protocol;
pub mod provider_a;
pub mod provider_b;

pub use provider_a::SmsProviderA;
pub use provider_b::SmsProviderB;

use lifeline_core::constants::{MSISDN_CC_DIGITS, MSISDN_LOCAL_DIGITS};
use lifeline_core::errors::ChannelError;

/// Normalize a phone number to digits only and validate its length.
///
/// Accepts 10 digits (local) or 12 digits (with country code); anything else
/// is rejected before a network call is made.
pub fn normalize_msisdn(destination: &str) -> Result<String, ChannelError> {
    let digits: String = destination.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == MSISDN_LOCAL_DIGITS || digits.len() == MSISDN_CC_DIGITS {
        Ok(digits)
    } else {
        Err(ChannelError::InvalidRecipient {
            recipient: destination.to_string(),
            reason: format!(
                "expected {MSISDN_LOCAL_DIGITS} or {MSISDN_CC_DIGITS} digits, got {}",
                digits.len()
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_formatting_characters() {
        assert_eq!(normalize_msisdn("+91 98765-43210").unwrap(), "919876543210");
        assert_eq!(normalize_msisdn("(987) 654-3210").unwrap(), "9876543210");
    }

    #[test]
    fn accepts_local_and_country_code_lengths() {
        assert!(normalize_msisdn("9876543210").is_ok());
        assert!(normalize_msisdn("919876543210").is_ok());
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert!(normalize_msisdn("12345").is_err());
        assert!(normalize_msisdn("98765432101").is_err()); // 11 digits
        assert!(normalize_msisdn("").is_err());
    }

    #[test]
    fn rejects_letters_only() {
        let err = normalize_msisdn("not-a-number").unwrap_err();
        assert!(matches!(err, ChannelError::InvalidRecipient { .. }));
    }
}
