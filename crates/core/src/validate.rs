//! Client-side credential validation
//!
//! Runs before any network call; a failure here never issues a request.

use crate::error::{Error, Result};

/// Minimum password length accepted by the platform
pub const MIN_PASSWORD_LEN: usize = 8;

/// Password policy: at least 8 characters containing upper-case,
/// lower-case, and digit classes. Each rule carries its own message.
pub fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(Error::Validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(Error::Validation(
            "Password must contain an upper-case letter".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(Error::Validation(
            "Password must contain a lower-case letter".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(Error::Validation(
            "Password must contain a digit".to_string(),
        ));
    }
    Ok(())
}

/// Validates a password change: policy plus confirmation match.
pub fn validate_password_change(password: &str, confirmation: &str) -> Result<()> {
    validate_password(password)?;
    if password != confirmation {
        return Err(Error::Validation("Passwords do not match".to_string()));
    }
    Ok(())
}
