//! ==============================================================================
//! submit.rs - steps of a form submission
//! ==============================================================================
//!
//! flow:
//!     1. previous results are cleared
//!     2. every row is validated; any failure stops here (Rejected)
//!     3. otherwise the form is busy and results are snapshotted (Pending)
//!     4. after SIMULATED_LATENCY the snapshot is published (complete)
//!
//! the view owns the signals and the timer; everything it decides lives here.
//!
//! ==============================================================================

use crate::form::UrlForm;
use crate::log::Level;
use crate::shorten::ShortenResult;

/// outcome of pressing submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStep {
    /// at least one row failed validation; errors are set on the rows
    Rejected,
    /// all rows passed; publish these once the simulated delay elapses
    Pending(Vec<ShortenResult>),
}

impl SubmitStep {
    /// event reported when this step is reached
    pub fn log_event(&self) -> (Level, &'static str) {
        match self {
            SubmitStep::Rejected => (Level::Warn, "Validation failed on form submit"),
            SubmitStep::Pending(_) => (Level::Info, "Submitting URL shortening request"),
        }
    }
}

/// page state outside the rows themselves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitState {
    pub results: Vec<ShortenResult>,
    pub submitting: bool,
}

impl SubmitState {
    /// clear old results and validate; the form keeps per-row errors
    pub fn begin(&mut self, form: &mut UrlForm, short_base: &str) -> SubmitStep {
        self.results.clear();

        if !form.validate() {
            return SubmitStep::Rejected;
        }

        self.submitting = true;
        SubmitStep::Pending(form.shorten(short_base))
    }

    /// publish the snapshot taken by `begin`
    pub fn complete(&mut self, results: Vec<ShortenResult>) -> (Level, &'static str) {
        self.results = results;
        self.submitting = false;
        (Level::Info, "Shortening successful")
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Field;
    use crate::validation::ValidationError;

    fn valid_form() -> UrlForm {
        let mut form = UrlForm::new();
        let id = form.ids()[0];
        form.set_field(id, Field::LongUrl, "https://example.com/a");
        form
    }

    #[test]
    fn test_invalid_form_is_rejected() {
        let mut form = UrlForm::new();
        let mut state = SubmitState {
            results: valid_form().shorten("http://short.url"),
            submitting: false,
        };

        let step = state.begin(&mut form, "http://short.url");

        assert_eq!(step, SubmitStep::Rejected);
        assert_eq!(step.log_event(), (Level::Warn, "Validation failed on form submit"));
        // stale results are gone and nothing is in flight
        assert!(state.results.is_empty());
        assert!(!state.submitting);
        assert_eq!(form.entries()[0].error, Some(ValidationError::InvalidUrl));
    }

    #[test]
    fn test_valid_form_goes_pending_then_completes() {
        let mut form = valid_form();
        let mut state = SubmitState::default();

        let step = state.begin(&mut form, "http://short.url");

        assert_eq!(step.log_event(), (Level::Info, "Submitting URL shortening request"));
        assert!(state.submitting);
        assert!(state.results.is_empty());

        let SubmitStep::Pending(results) = step else {
            panic!("expected pending step");
        };
        assert_eq!(results[0].short_url, "http://short.url/abc1");

        let event = state.complete(results);

        assert_eq!(event, (Level::Info, "Shortening successful"));
        assert!(!state.submitting);
        assert_eq!(state.results.len(), 1);
        assert_eq!(state.results[0].original_url, "https://example.com/a");
    }

    #[test]
    fn test_snapshot_ignores_later_edits() {
        let mut form = valid_form();
        let mut state = SubmitState::default();

        let SubmitStep::Pending(results) = state.begin(&mut form, "http://short.url") else {
            panic!("expected pending step");
        };
        let id = form.ids()[0];
        form.set_field(id, Field::Shortcode, "later");
        state.complete(results);

        assert_eq!(state.results[0].short_url, "http://short.url/abc1");
    }
}
