//! Pages
//!
//! Top-level page components for each route.

pub mod add_reading;
pub mod dashboard;
pub mod plant_details;
pub mod plant_form;
pub mod settings;

pub use add_reading::AddReading;
pub use dashboard::Dashboard;
pub use plant_details::PlantDetailsPage;
pub use plant_form::{AddPlant, EditPlant};
pub use settings::Settings;
