//! ==============================================================================
//! validation.rs - per-row field rules
//! ==============================================================================
//!
//! rules, checked in this order (first failure wins):
//!     1. long url must parse as an absolute url
//!     2. validity, if given, must be a positive integer
//!     3. shortcode, if given, must be alphanumeric
//!
//! ==============================================================================

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::entry::UrlEntry;

static VALIDITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("static validity pattern"));

static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("static shortcode pattern"));

/// reason a row was rejected; the display text is shown under the row
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Enter a valid URL")]
    InvalidUrl,

    #[error("Validity must be a positive integer")]
    InvalidValidity,

    #[error("Shortcode must be alphanumeric")]
    InvalidShortcode,
}

/// check that `input` is a well-formed absolute url
pub fn validate_url(input: &str) -> Result<Url, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::InvalidUrl);
    }
    Url::parse(input).map_err(|_| ValidationError::InvalidUrl)
}

/// check an optional validity in minutes
///
/// any digit string with a non-zero digit is positive, however long.
pub fn validate_validity(input: &str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Ok(());
    }
    if VALIDITY_REGEX.is_match(input) && input.chars().any(|c| c != '0') {
        Ok(())
    } else {
        Err(ValidationError::InvalidValidity)
    }
}

/// check an optional custom shortcode
pub fn validate_shortcode(input: &str) -> Result<(), ValidationError> {
    if input.is_empty() || SHORTCODE_REGEX.is_match(input) {
        Ok(())
    } else {
        Err(ValidationError::InvalidShortcode)
    }
}

/// run every rule against one row
pub fn validate_entry(entry: &UrlEntry) -> Result<(), ValidationError> {
    validate_url(&entry.long_url)?;
    validate_validity(&entry.validity)?;
    validate_shortcode(&entry.shortcode)
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(url: &str, validity: &str, shortcode: &str) -> UrlEntry {
        let mut entry = UrlEntry::new(0);
        entry.long_url = url.to_string();
        entry.validity = validity.to_string();
        entry.shortcode = shortcode.to_string();
        entry
    }

    #[test]
    fn test_absolute_urls_accepted() {
        assert!(validate_url("https://example.com/very/long/path?q=1").is_ok());
        assert!(validate_url("http://localhost:8080").is_ok());
        assert!(validate_url("ftp://files.example.org/a.txt").is_ok());
        assert!(validate_url("mailto:someone@example.com").is_ok());
    }

    #[test]
    fn test_malformed_urls_rejected() {
        assert_eq!(validate_url(""), Err(ValidationError::InvalidUrl));
        assert_eq!(validate_url("example.com"), Err(ValidationError::InvalidUrl));
        assert_eq!(validate_url("/relative/path"), Err(ValidationError::InvalidUrl));
        assert_eq!(validate_url("http://"), Err(ValidationError::InvalidUrl));
        assert_eq!(validate_url("not a url"), Err(ValidationError::InvalidUrl));
    }

    #[test]
    fn test_validity_rules() {
        assert_eq!(validate_validity(""), Ok(()));
        assert_eq!(validate_validity("30"), Ok(()));
        assert_eq!(validate_validity("007"), Ok(()));

        for bad in ["0", "000", "-5", "1.5", "abc", " 10", "10 "] {
            assert_eq!(validate_validity(bad), Err(ValidationError::InvalidValidity), "{bad:?}");
        }
    }

    #[test]
    fn test_long_validity_accepted() {
        // larger than any integer type, still a positive integer
        assert_eq!(validate_validity("99999999999999999999999"), Ok(()));
        assert_eq!(validate_validity("00000000000000000000001"), Ok(()));
    }

    #[test]
    fn test_shortcode_rules() {
        assert!(validate_shortcode("").is_ok());
        assert!(validate_shortcode("Promo2024").is_ok());

        for bad in ["my-link", "my_link", "with space", "émoji", "a/b"] {
            assert_eq!(validate_shortcode(bad), Err(ValidationError::InvalidShortcode), "{bad:?}");
        }
    }

    #[test]
    fn test_first_failing_rule_wins() {
        // bad url masks the other two
        assert_eq!(
            validate_entry(&entry("nope", "-1", "bad code")),
            Err(ValidationError::InvalidUrl)
        );
        assert_eq!(
            validate_entry(&entry("https://a.io", "-1", "bad code")),
            Err(ValidationError::InvalidValidity)
        );
        assert_eq!(
            validate_entry(&entry("https://a.io", "", "bad code")),
            Err(ValidationError::InvalidShortcode)
        );
        assert_eq!(validate_entry(&entry("https://a.io", "", "")), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::InvalidUrl.to_string(), "Enter a valid URL");
        assert_eq!(
            ValidationError::InvalidValidity.to_string(),
            "Validity must be a positive integer"
        );
        assert_eq!(
            ValidationError::InvalidShortcode.to_string(),
            "Shortcode must be alphanumeric"
        );
    }
}
