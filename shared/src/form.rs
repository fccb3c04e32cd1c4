//! ==============================================================================
//! form.rs - ordered url rows of the shortener form
//! ==============================================================================
//!
//! invariant: a form always holds between 1 and MAX_ROWS rows. rows are
//! addressed by a stable id so the view can key its list and keep input
//! focus while other rows are edited or removed.
//!
//! ==============================================================================

use crate::entry::{Field, RowId, UrlEntry};
use crate::shorten::ShortenResult;
use crate::validation::validate_entry;
use crate::MAX_ROWS;

#[derive(Debug, Clone, PartialEq)]
pub struct UrlForm {
    entries: Vec<UrlEntry>,
    next_id: RowId,
}

impl Default for UrlForm {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlForm {
    /// a form with a single blank row
    pub fn new() -> Self {
        Self {
            entries: vec![UrlEntry::new(0)],
            next_id: 1,
        }
    }

    pub fn entries(&self) -> &[UrlEntry] {
        &self.entries
    }

    pub fn entry(&self, id: RowId) -> Option<&UrlEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// always false; kept for parity with `len`
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> Vec<RowId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    pub fn can_add(&self) -> bool {
        self.entries.len() < MAX_ROWS
    }

    pub fn can_remove(&self) -> bool {
        self.entries.len() > 1
    }

    /// append a blank row; false when the form is full
    pub fn add_row(&mut self) -> bool {
        if !self.can_add() {
            return false;
        }
        self.entries.push(UrlEntry::new(self.next_id));
        self.next_id += 1;
        true
    }

    /// drop a row; false when it is the last one or the id is unknown
    pub fn remove_row(&mut self, id: RowId) -> bool {
        if !self.can_remove() {
            return false;
        }
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// edit one field of a row, clearing that row's error
    pub fn set_field(&mut self, id: RowId, field: Field, value: impl Into<String>) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.set(field, value.into());
        }
    }

    /// re-check every row and record its error; true when all rows pass
    pub fn validate(&mut self) -> bool {
        let mut valid = true;
        for entry in &mut self.entries {
            entry.error = validate_entry(entry).err();
            valid &= entry.error.is_none();
        }
        valid
    }

    /// fabricate placeholder short urls, one per row in display order
    ///
    /// rows without a shortcode get `abc{n}` where n is the 1-based position.
    pub fn shorten(&self, short_base: &str) -> Vec<ShortenResult> {
        let base = short_base.trim_end_matches('/');
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| ShortenResult::fabricate(base, idx + 1, entry))
            .collect()
    }
}

// ==============================================================================
// tests
// ==============================================================================
