//! Phone number normalization.
//!
//! The service launched in India, so bare 10-digit numbers default to the
//! +91 country code; 11-digit numbers with a leading 1 are treated as North
//! American. Anything else must already carry its country code.

use crate::error::MessagingError;

/// Normalize a user-entered phone number to E.164.
pub fn normalize(input: &str) -> Result<String, MessagingError> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() < 10 {
        return Err(MessagingError::InvalidPhone(input.to_string()));
    }

    if digits.len() == 12 && digits.starts_with("91") {
        return Ok(format!("+{digits}"));
    }
    if digits.len() == 10 {
        return Ok(format!("+91{digits}"));
    }
    if digits.len() == 11 && digits.starts_with('1') {
        return Ok(format!("+{digits}"));
    }

    // Already carries a country code.
    Ok(format!("+{digits}"))
}
