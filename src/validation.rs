//! Pure input validators
//!
//! Shared between the standalone helpers used by form code and the
//! `validator` derives on the payload types.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// Email shape: at least one non-whitespace, non-`@` character before the
/// `@`, and a dot-separated label after it.
pub static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("invalid phone regex"));

static PHONE_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-()]").expect("invalid separator regex"));

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Phone shape: optional leading `+`, first digit 1-9, up to fifteen more
/// digits, after stripping spaces, hyphens and parentheses.
pub fn validate_phone(phone: &str) -> bool {
    let stripped = PHONE_SEPARATORS.replace_all(phone, "");
    PHONE_RE.is_match(&stripped)
}

/// `validator` hook for phone fields on payload types
pub fn phone_field(phone: &str) -> Result<(), ValidationError> {
    if validate_phone(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("phone"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_emails() {
        assert!(validate_email("admin@library.com"));
        assert!(validate_email("jane.smith@x.co.uk"));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!validate_email("admin@library"));
        assert!(!validate_email("@library.com"));
        assert!(!validate_email("admin library.com"));
        assert!(!validate_email("admin@ library.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn accepts_phones_with_separators() {
        assert!(validate_phone("+1 (555) 123-4567"));
        assert!(validate_phone("5551234567"));
        assert!(validate_phone("+441632960961"));
    }

    #[test]
    fn rejects_malformed_phones() {
        assert!(!validate_phone("0555123456")); // leading zero
        assert!(!validate_phone("+"));
        assert!(!validate_phone("phone"));
        assert!(!validate_phone("12345678901234567")); // seventeen digits
    }
}
