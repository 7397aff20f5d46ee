//! Backend REST Contract
//!
//! Paths and bodies of the plant-monitoring API, shared by the native
//! client and the browser dashboard.
//!
//! # Endpoints
//!
//! ## Plants
//! - `GET /dashboard` - All plants with status and last reading attached
//! - `GET /plants` - All plants
//! - `GET /plants/{id}` - One plant
//! - `POST /plants` - Create a plant
//! - `PUT /plants/{id}` - Update a plant
//! - `DELETE /plants/{id}` - Delete a plant (empty or JSON body)
//!
//! ## Readings
//! - `GET /readings/{plant_id}` - Reading history (primary)
//! - `GET /plants/{plant_id}/readings` - Reading history (fallback)
//! - `POST /readings` - Log a reading
//!
//! Any non-2xx response is a failure regardless of its body.

pub mod dto;
pub mod endpoints;

pub use dto::{NewReading, PlantPayload};
pub use endpoints::{ReadingsEndpoint, ReadingsProbe};
