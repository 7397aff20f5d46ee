//! Page View-Models
//!
//! Pure, rendering-agnostic state for each page. The browser dashboard binds
//! these to Leptos components; the CLI renders them as text through
//! [`crate::render`]. Nothing in here performs I/O.

pub mod dashboard;
pub mod details;
pub mod format;
pub mod plant_form;
pub mod reading_form;
pub mod route;

pub use dashboard::{DashboardRow, DashboardView, PlantFilter, StatusFilter, StatusSummary};
pub use details::{HistoryRow, PlantDetails};
pub use plant_form::{FormMode, PlantFieldError, PlantForm, PlantFormErrors, RangeSliders};
pub use reading_form::{PlantOption, ReadingFieldError, ReadingForm, ReadingFormErrors};
pub use route::{Route, RouteError};
