//! Watering status classification
//!
//! A plant's status is never stored on its own: it is derived from the most
//! recent moisture reading and the plant's ideal range.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::types::MoistureRange;

/// Derived watering status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlantStatus {
    /// Latest reading is inside the ideal range
    Ok,
    /// Latest reading is below the ideal minimum
    NeedsWater,
    /// Latest reading is above the ideal maximum
    Overwatered,
    /// No reading has been recorded
    NoData,
}

impl PlantStatus {
    /// All statuses in display order
    pub fn all() -> &'static [PlantStatus] {
        &[
            PlantStatus::Ok,
            PlantStatus::NeedsWater,
            PlantStatus::Overwatered,
            PlantStatus::NoData,
        ]
    }

    /// Label used on the wire and in filter values
    pub fn as_str(&self) -> &'static str {
        match self {
            PlantStatus::Ok => "ok",
            PlantStatus::NeedsWater => "needs_water",
            PlantStatus::Overwatered => "overwatered",
            PlantStatus::NoData => "no_data",
        }
    }

    /// Human-readable label for status pills
    pub fn label(&self) -> &'static str {
        match self {
            PlantStatus::Ok => "OK",
            PlantStatus::NeedsWater => "Needs Water",
            PlantStatus::Overwatered => "Overwatered",
            PlantStatus::NoData => "No Data",
        }
    }

    /// Style class for status pills
    pub fn css_class(&self) -> &'static str {
        match self {
            PlantStatus::Ok => "status-ok",
            PlantStatus::NeedsWater => "status-needs",
            PlantStatus::Overwatered => "status-over",
            PlantStatus::NoData => "status-nodata",
        }
    }

    /// Re-classify a status string reported by the backend.
    ///
    /// Matching ignores case and surrounding whitespace and accepts the
    /// legacy `"needs water"` spelling. Absent or unknown strings are
    /// `NoData`.
    pub fn from_reported(reported: Option<&str>) -> Self {
        reported
            .and_then(|s| s.parse().ok())
            .unwrap_or(PlantStatus::NoData)
    }
}

impl std::fmt::Display for PlantStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for status strings outside the known set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plant status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for PlantStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ok" => Ok(PlantStatus::Ok),
            "needs_water" | "needs water" => Ok(PlantStatus::NeedsWater),
            "overwatered" => Ok(PlantStatus::Overwatered),
            "no_data" => Ok(PlantStatus::NoData),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// Classify a moisture reading against an ideal range.
///
/// The range is inclusive on both ends. A missing reading is `NoData`.
pub fn classify(reading: Option<f64>, range: MoistureRange) -> PlantStatus {
    match reading {
        None => PlantStatus::NoData,
        Some(value) if value < f64::from(range.min) => PlantStatus::NeedsWater,
        Some(value) if range.contains(value) => PlantStatus::Ok,
        Some(_) => PlantStatus::Overwatered,
    }
}
