//! Text Rendering
//!
//! Terminal output for the page view-models, plus CSV export of a reading
//! history.

#[cfg(feature = "client")]
mod export;
pub mod table;

#[cfg(feature = "client")]
pub use export::{history_csv, ExportError};
pub use table::{dashboard, details, history, summary};
