//! Input validation helpers
//!
//! Centralized text length constants and validation functions. Validation
//! runs field by field in declaration order, so the first failing field is
//! the one surfaced to the caller.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: branch, supplier, brand, category, unit, position, product.
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: phone numbers, country codes, professions, etc.
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Descriptions and notes.
pub const MAX_NOTE_LEN: usize = 500;

/// Email addresses (RFC 5321).
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing).
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 128;

/// URLs / image paths.
pub const MAX_URL_LEN: usize = 2048;

/// Addresses.
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate a status field: only 0 (inactive) and 1 (active) are accepted.
pub fn validate_status(value: Option<i32>, field: &str) -> Result<(), AppError> {
    if let Some(v) = value
        && v != 0
        && v != 1
    {
        return Err(AppError::validation(format!(
            "{field} must be either 0 (inactive) or 1 (active)"
        )));
    }
    Ok(())
}

/// Validate a required email address (shape check, not full RFC parsing).
pub fn validate_email(value: &str, field: &str) -> Result<(), AppError> {
    validate_required_text(value, field, MAX_EMAIL_LEN)?;
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(AppError::validation(format!(
            "{field} must be a valid email address"
        )));
    }
    Ok(())
}

/// Validate an optional email address.
pub fn validate_optional_email(value: &Option<String>, field: &str) -> Result<(), AppError> {
    match value {
        Some(v) => validate_email(v, field),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_required_text() {
        assert!(validate_required_text("", "branch_name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("   ", "branch_name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Main St", "branch_name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn rejects_overlong_text() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
        assert!(validate_optional_text(&Some(long), "name", MAX_NAME_LEN).is_err());
        assert!(validate_optional_text(&None, "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn status_accepts_only_zero_and_one() {
        assert!(validate_status(None, "status").is_ok());
        assert!(validate_status(Some(0), "status").is_ok());
        assert!(validate_status(Some(1), "status").is_ok());
        assert!(validate_status(Some(2), "status").is_err());
        assert!(validate_status(Some(-1), "status").is_err());
    }

    #[test]
    fn email_shape_check() {
        assert!(validate_email("a@b.com", "email").is_ok());
        assert!(validate_email("nope", "email").is_err());
        assert!(validate_email("@b.com", "email").is_err());
        assert!(validate_email("a@", "email").is_err());
        assert!(validate_email("a@nodot", "email").is_err());
    }
}
