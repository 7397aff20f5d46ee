//! Request bodies sent to the backend

use serde::{Deserialize, Serialize};

/// Body of `POST /plants` and `PUT /plants/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantPayload {
    pub name: String,
    pub species: String,
    pub ideal_moisture_min: i32,
    pub ideal_moisture_max: i32,
}

/// Body of `POST /readings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReading {
    pub plant_id: i64,
    pub moisture_percent: f64,
}
