//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement, so limits are
//! applied at the API boundary.

use shared::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Names: full name, department, designation
pub const MAX_NAME_LEN: usize = 200;

/// Notes, reasons, comments (leave reason, admin comment)
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: employee code, phone
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// URLs / object-store refs
pub const MAX_URL_LEN: usize = 2048;

/// Addresses
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

/// Validate a monetary amount is finite and non-negative
pub fn validate_money(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::with_message(
            ErrorCode::InvalidSalary,
            format!("{field} must be a finite number"),
        ));
    }
    if value < 0.0 {
        return Err(AppError::with_message(
            ErrorCode::InvalidSalary,
            format!("{field} must be non-negative, got {value}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("ok", "field", 10).is_ok());
        assert!(validate_required_text("   ", "field", 10).is_err());
        assert!(validate_required_text("toolongvalue", "field", 5).is_err());
    }

    #[test]
    fn test_money() {
        assert!(validate_money(0.0, "base_salary").is_ok());
        assert!(validate_money(50000.0, "base_salary").is_ok());
        let err = validate_money(-1.0, "base_salary").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSalary);
        assert!(validate_money(f64::NAN, "base_salary").is_err());
    }
}
