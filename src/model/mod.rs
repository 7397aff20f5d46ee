//! Domain Model
//!
//! Plants, readings and the watering status derived from them.
//!
//! Status is computed by [`classify`] from a reading and an ideal range;
//! the backend also sends a denormalized status string on dashboard rows,
//! and [`StatusPolicy`] decides which of the two the dashboard trusts.

mod status;
mod types;

pub use status::{classify, PlantStatus, UnknownStatus};
pub use types::{
    parse_timestamp, LastReading, MoistureRange, Plant, Reading, StatusPolicy, UNKNOWN_SPECIES,
};
