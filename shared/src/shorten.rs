//! Simulated shortening results

use crate::entry::UrlEntry;
use crate::DEFAULT_VALIDITY_MINUTES;

/// placeholder short url shown after a submit; never persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenResult {
    pub original_url: String,
    pub short_url: String,
    /// human readable lifetime, e.g. "30 min"
    pub expiry: String,
}

impl ShortenResult {
    /// build the result for the row at 1-based `position`
    ///
    /// `base` must not end with a slash.
    pub(crate) fn fabricate(base: &str, position: usize, entry: &UrlEntry) -> Self {
        let code = if entry.shortcode.is_empty() {
            format!("abc{}", position)
        } else {
            entry.shortcode.clone()
        };
        let expiry = if entry.validity.is_empty() {
            format!("{} min", DEFAULT_VALIDITY_MINUTES)
        } else {
            format!("{} min", entry.validity)
        };

        Self {
            original_url: entry.long_url.clone(),
            short_url: format!("{}/{}", base, code),
            expiry,
        }
    }
}
