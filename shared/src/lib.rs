//! ==============================================================================
//! lib.rs - shared types for the link shortener form
//! ==============================================================================
//!
//! purpose:
//!     target-independent domain logic behind the dashboard: form rows,
//!     field validation, simulated shortening and the log collector payload.
//!     nothing in here touches the browser, so it builds and tests natively.
//!
//! relationships:
//!     - used by: dashboard (form state, submit flow, results, log payloads)
//!
//! ==============================================================================

use std::time::Duration;

mod entry;
mod form;
mod log;
mod shorten;
mod submit;
mod validation;

pub use entry::{Field, RowId, UrlEntry};
pub use form::UrlForm;
pub use log::{Level, LogEntry, ParseLogFieldError, Stack};
pub use shorten::ShortenResult;
pub use submit::{SubmitState, SubmitStep};
pub use validation::{validate_entry, validate_shortcode, validate_url, validate_validity, ValidationError};

// ==============================================================================
// constants
// ==============================================================================

/// most rows a form may hold
pub const MAX_ROWS: usize = 5;

/// validity prefilled in new rows and used when a row leaves it blank
pub const DEFAULT_VALIDITY_MINUTES: u64 = 30;

/// delay before fabricated results are shown
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1000);
