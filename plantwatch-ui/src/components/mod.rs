//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod loading;
pub mod nav;
pub mod range_slider;
pub mod status_pill;
pub mod summary_cards;
pub mod toast;

pub use loading::{InlineLoading, Loading};
pub use nav::Nav;
pub use range_slider::RangeSlider;
pub use status_pill::StatusPill;
pub use summary_cards::SummaryCards;
pub use toast::Toast;
