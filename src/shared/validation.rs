//! Request Validation
//!
//! Field-level checks used by the request types. Every request body that
//! reaches a handler has passed `Validate::validate`, so the services below the
//! HTTP boundary only ever see non-empty, well-formed values.
//!
//! "Empty" means the empty string only; a whitespace-only value is accepted.

use crate::shared::error::SharedError;

/// Implemented by every request body accepted by the API.
pub trait Validate {
    /// Check the whole value, reporting the first offending field.
    fn validate(&self) -> Result<(), SharedError>;
}

/// Reject the empty string.
pub fn validate_required(value: &str, field: &str) -> Result<(), SharedError> {
    if value.is_empty() {
        return Err(SharedError::validation(
            field,
            format!("{} should not be empty", field),
        ));
    }
    Ok(())
}

/// Basic email shape check.
///
/// Exactly one `@`, a non-empty local part without whitespace or leading,
/// trailing or doubled dots, and a dotted domain. Domain labels are letters
/// (any script), digits and inner `-`; the last label is at least two letters.
pub fn validate_email(value: &str) -> Result<(), SharedError> {
    validate_required(value, "email")?;

    let invalid = || SharedError::validation("email", "email must be an email");

    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if domain.contains('@') {
        return Err(invalid());
    }

    if local.is_empty() || local.len() > 64 {
        return Err(invalid());
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err(invalid());
    }
    if local.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid());
    }

    if domain.len() > 253 {
        return Err(invalid());
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || !labels.iter().all(|label| is_domain_label(label)) {
        return Err(invalid());
    }

    let tld = labels[labels.len() - 1];
    if tld.chars().count() < 2 || !tld.chars().all(char::is_alphabetic) {
        return Err(invalid());
    }

    Ok(())
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_alphanumeric() || c == '-')
}

/// Email check for optional fields; `None` is accepted.
pub fn validate_optional_email(value: Option<&str>) -> Result<(), SharedError> {
    match value {
        Some(email) => validate_email(email),
        None => Ok(()),
    }
}

/// Required-if-present check for optional fields.
pub fn validate_optional_required(value: Option<&str>, field: &str) -> Result<(), SharedError> {
    match value {
        Some(value) => validate_required(value, field),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_only_empty() {
        assert!(validate_required("", "password").is_err());
        assert!(validate_required("   ", "password").is_ok());
        assert!(validate_required("asd123", "password").is_ok());
    }

    #[test]
    fn test_required_names_field() {
        let err = validate_required("", "title").unwrap_err();
        assert_eq!(err, SharedError::validation("title", "title should not be empty"));
    }

    #[test]
    fn test_valid_emails() {
        for email in [
            "asd@dada.com",
            "first.last@example.co.uk",
            "a+tag@sub-domain.io",
            "user@münchen.de",
        ] {
            assert!(validate_email(email).is_ok(), "{email} should be valid");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@localhost",
            "user@@example.com",
            "a@b@example.com",
            ".user@example.com",
            "us..er@example.com",
            "user@-example.com",
            "user@example..com",
            "us er@example.com",
            "user@exa mple.com",
            "a@b.c",
            "a@b.123",
            "user@example.c0m",
            "user@example-.com",
        ] {
            assert!(validate_email(email).is_err(), "{email:?} should be invalid");
        }
    }

    #[test]
    fn test_optional_helpers() {
        assert!(validate_optional_email(None).is_ok());
        assert!(validate_optional_email(Some("nope")).is_err());
        assert!(validate_optional_required(None, "title").is_ok());
        assert!(validate_optional_required(Some(""), "title").is_err());
    }
}
