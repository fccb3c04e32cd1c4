//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod header;
mod results;
mod shortener;
mod statistics;
mod url_row;

pub use header::Header;
pub use shortener::ShortenerPage;
pub use statistics::{NotFound, StatisticsPage};
