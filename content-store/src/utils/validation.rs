//! Input validation helpers
//!
//! Length limits for text coming from public forms and the admin panel.
//! Stored values are JSON text in a quota-bound store. Image fields may hold
//! inline data URLs, so they are bounded by the storage quota, not here.

use shared::error::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Person / product / category names
pub const MAX_NAME_LEN: usize = 200;

/// Lead messages, descriptions, FAQ answers
pub const MAX_NOTE_LEN: usize = 2000;

/// Phone numbers, colour codes, short labels
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Plain links typed into the admin panel (hero video)
pub const MAX_URL_LEN: usize = 2048;

// ── Helpers ─────────────────────────────────────────────────────────

/// Required string: non-empty after trimming and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required_field(field));
    }
    check_len(value, field, max_len)
}

/// Optional string: only the length is checked.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        check_len(v, field, max_len)?;
    }
    Ok(())
}

/// Free text that may be empty.
pub fn validate_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    check_len(value, field, max_len)
}

fn check_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("张先生", "name", MAX_NAME_LEN).is_ok());

        let err = validate_required_text("   ", "phone", MAX_SHORT_TEXT_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "phone is required");

        let err = validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 100 CJK chars = 300 bytes
        assert!(validate_text(&"静".repeat(100), "label", MAX_SHORT_TEXT_LEN).is_ok());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "company", MAX_NAME_LEN).is_ok());
        assert!(validate_optional_text(&Some("x".repeat(300)), "company", MAX_NAME_LEN).is_err());
    }
}
