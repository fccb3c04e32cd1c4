//! Form row types

use crate::validation::ValidationError;
use crate::DEFAULT_VALIDITY_MINUTES;

/// stable key of a row within one form
pub type RowId = u32;

/// editable field of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    LongUrl,
    Validity,
    Shortcode,
}

/// one url row of the shortener form
///
/// every field is kept as the raw input text; parsing happens during
/// validation so the user always sees exactly what they typed.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    pub id: RowId,
    pub long_url: String,
    /// lifetime in minutes, empty means the default
    pub validity: String,
    /// custom alias, empty means a generated one
    pub shortcode: String,
    /// result of the last validation pass, cleared on edit
    pub error: Option<ValidationError>,
}

impl UrlEntry {
    pub fn new(id: RowId) -> Self {
        Self {
            id,
            long_url: String::new(),
            validity: DEFAULT_VALIDITY_MINUTES.to_string(),
            shortcode: String::new(),
            error: None,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::LongUrl => &self.long_url,
            Field::Validity => &self.validity,
            Field::Shortcode => &self.shortcode,
        }
    }

    /// store a field value; any previous error no longer applies
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::LongUrl => self.long_url = value,
            Field::Validity => self.validity = value,
            Field::Shortcode => self.shortcode = value,
        }
        self.error = None;
    }
}

// ==============================================================================
// tests
// ==============================================================================
