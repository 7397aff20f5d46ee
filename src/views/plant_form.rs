//! Plant create/edit form
//!
//! The two range sliders keep `min <= max` while the user drags them;
//! submit-time validation re-checks everything before any request is made.

use serde::Serialize;
use thiserror::Error;

use crate::api::PlantPayload;
use crate::model::{Plant, UNKNOWN_SPECIES};

pub const MOISTURE_LOWER: i32 = 0;
pub const MOISTURE_UPPER: i32 = 100;

pub const NAME_MIN_LEN: usize = 3;

/// Linked min/max sliders over `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSliders {
    min: i32,
    max: i32,
}

impl Default for RangeSliders {
    fn default() -> Self {
        Self { min: 30, max: 60 }
    }
}

impl RangeSliders {
    /// Start from stored values; an inverted pair is collapsed onto `min`
    pub fn new(min: i32, max: i32) -> Self {
        let min = clamp_percent(min);
        let max = clamp_percent(max).max(min);
        Self { min, max }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Move the min slider; drags max up with it when crossing
    pub fn set_min(&mut self, value: i32) {
        self.min = clamp_percent(value);
        if self.max < self.min {
            self.max = self.min;
        }
    }

    /// Move the max slider; drags min down with it when crossing
    pub fn set_max(&mut self, value: i32) {
        self.max = clamp_percent(value);
        if self.max < self.min {
            self.min = self.max;
        }
    }

    /// Fill position of the slider track, as a CSS percentage
    pub fn track_fill(value: i32) -> String {
        format!("{}%", clamp_percent(value))
    }
}

fn clamp_percent(value: i32) -> i32 {
    value.clamp(MOISTURE_LOWER, MOISTURE_UPPER)
}

/// Whether the form creates a new plant or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    pub fn failure_message(&self) -> &'static str {
        match self {
            FormMode::Create => "Failed to create plant. Please try again.",
            FormMode::Edit(_) => "Failed to update plant. Please try again.",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Add Plant",
            FormMode::Edit(_) => "Save Changes",
        }
    }
}

/// Raw form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantForm {
    pub name: String,
    pub species: String,
    pub ideal_moisture_min: i32,
    pub ideal_moisture_max: i32,
}

impl Default for PlantForm {
    fn default() -> Self {
        let sliders = RangeSliders::default();
        Self {
            name: String::new(),
            species: String::new(),
            ideal_moisture_min: sliders.min(),
            ideal_moisture_max: sliders.max(),
        }
    }
}

impl PlantForm {
    /// Pre-fill from a loaded plant for editing
    pub fn from_plant(plant: &Plant) -> Self {
        Self {
            name: plant.name.clone(),
            species: plant.species.clone(),
            ideal_moisture_min: plant.ideal_moisture_min,
            ideal_moisture_max: plant.ideal_moisture_max,
        }
    }

    pub fn with_sliders(mut self, sliders: RangeSliders) -> Self {
        self.ideal_moisture_min = sliders.min();
        self.ideal_moisture_max = sliders.max();
        self
    }

    /// Validate and build the request body.
    ///
    /// Name and species are trimmed; an empty species becomes "Unknown".
    pub fn validate(&self) -> Result<PlantPayload, PlantFormErrors> {
        let name = self.name.trim();
        let species = self.species.trim();
        let min = self.ideal_moisture_min;
        let max = self.ideal_moisture_max;

        let mut errors = PlantFormErrors::default();

        if name.chars().count() < NAME_MIN_LEN {
            errors.name = Some(PlantFieldError::NameTooShort);
        }

        if min < MOISTURE_LOWER {
            errors.min = Some(PlantFieldError::MinBelowZero);
        } else if min > MOISTURE_UPPER {
            errors.min = Some(PlantFieldError::MinAboveHundred);
        }

        if max < MOISTURE_LOWER {
            errors.max = Some(PlantFieldError::MaxBelowZero);
        } else if max > MOISTURE_UPPER {
            errors.max = Some(PlantFieldError::MaxAboveHundred);
        } else if max < min {
            errors.max = Some(PlantFieldError::MaxBelowMin);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(PlantPayload {
            name: name.to_string(),
            species: if species.is_empty() {
                UNKNOWN_SPECIES.to_string()
            } else {
                species.to_string()
            },
            ideal_moisture_min: min,
            ideal_moisture_max: max,
        })
    }
}

/// A single field's validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum PlantFieldError {
    #[error("Plant name must be at least 3 characters long.")]
    NameTooShort,

    #[error("Minimum moisture cannot be less than 0%.")]
    MinBelowZero,

    #[error("Minimum moisture cannot exceed 100%.")]
    MinAboveHundred,

    #[error("Maximum moisture cannot be less than 0%.")]
    MaxBelowZero,

    #[error("Maximum moisture cannot exceed 100%.")]
    MaxAboveHundred,

    #[error("Maximum moisture must be greater than or equal to minimum.")]
    MaxBelowMin,
}

/// Per-field errors shown inline under the form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize)]
#[error("invalid plant form")]
pub struct PlantFormErrors {
    pub name: Option<PlantFieldError>,
    pub min: Option<PlantFieldError>,
    pub max: Option<PlantFieldError>,
}

impl PlantFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.min.is_none() && self.max.is_none()
    }

    /// Messages in field order, for non-inline surfaces
    pub fn messages(&self) -> Vec<String> {
        [self.name, self.min, self.max]
            .into_iter()
            .flatten()
            .map(|e| e.to_string())
            .collect()
    }
}
