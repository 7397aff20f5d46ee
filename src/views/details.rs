//! Plant details view-model
//!
//! Unlike the dashboard, the details page never trusts the backend's status
//! field: status is recomputed from the newest reading in the history.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{classify, Plant, PlantStatus, Reading};
use crate::views::format::{format_absolute, format_percent, format_relative};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load plant details.";
pub const NO_READINGS_MESSAGE: &str = "No readings yet.";

/// One history table row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRow {
    pub moisture_percent: f64,
    pub status: PlantStatus,
    pub timestamp: DateTime<Utc>,
}

/// View-model for the plant details page
#[derive(Debug, Clone, PartialEq)]
pub struct PlantDetails {
    plant: Plant,
    /// Newest first
    readings: Vec<Reading>,
}

impl PlantDetails {
    /// Build the view; readings are sorted newest first
    pub fn new(plant: Plant, mut readings: Vec<Reading>) -> Self {
        readings.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Self { plant, readings }
    }

    pub fn plant(&self) -> &Plant {
        &self.plant
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn latest(&self) -> Option<&Reading> {
        self.readings.first()
    }

    /// Status recomputed from the newest reading
    pub fn status(&self) -> PlantStatus {
        classify(
            self.latest().map(|r| r.moisture_percent),
            self.plant.ideal_range(),
        )
    }

    pub fn species_label(&self) -> &str {
        if self.plant.species.trim().is_empty() {
            "Unknown species"
        } else {
            &self.plant.species
        }
    }

    /// e.g. "30% - 60%"
    pub fn ideal_range_label(&self) -> String {
        self.plant.ideal_range().to_string()
    }

    /// Last moisture value, or "–" without readings
    pub fn last_moisture_label(&self) -> String {
        self.latest()
            .map(|r| format_percent(r.moisture_percent))
            .unwrap_or_else(|| "–".to_string())
    }

    /// Absolute time of the last reading in local time, or "–"
    pub fn last_reading_time(&self) -> String {
        self.latest()
            .map(|r| format_absolute(Some(r.timestamp)))
            .unwrap_or_else(|| "–".to_string())
    }

    /// e.g. "Last reading: 5 min ago"
    pub fn last_reading_short(&self, now: DateTime<Utc>) -> String {
        let relative = self
            .latest()
            .map(|r| format_relative(Some(r.timestamp), now))
            .unwrap_or_else(|| "–".to_string());
        format!("Last reading: {}", relative)
    }

    /// Full history with per-row recomputed status, newest first
    pub fn history(&self) -> Vec<HistoryRow> {
        let range = self.plant.ideal_range();
        self.readings
            .iter()
            .map(|r| HistoryRow {
                moisture_percent: r.moisture_percent,
                status: classify(Some(r.moisture_percent), range),
                timestamp: r.timestamp,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn plant() -> Plant {
        serde_json::from_str(
            r#"{"id": 4, "name": "Peace Lily", "species": "Spathiphyllum",
                "ideal_moisture_min": 30, "ideal_moisture_max": 60,
                "status": "overwatered"}"#,
        )
        .unwrap()
    }

    fn reading(id: i64, moisture: f64, ts: DateTime<Utc>) -> Reading {
        Reading {
            id,
            plant_id: 4,
            moisture_percent: moisture,
            timestamp: ts,
        }
    }

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_sorted_newest_first_and_status_recomputed() {
        let t = base();
        let details = PlantDetails::new(
            plant(),
            vec![
                reading(1, 75.0, t - Duration::hours(3)),
                reading(3, 20.0, t),
                reading(2, 45.0, t - Duration::hours(1)),
            ],
        );

        let ids: Vec<i64> = details.readings().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        // Backend said overwatered; the newest reading says otherwise
        assert_eq!(details.status(), PlantStatus::NeedsWater);
        assert_eq!(details.last_moisture_label(), "20%");
        assert_eq!(
            details.last_reading_short(t + Duration::minutes(5)),
            "Last reading: 5 min ago"
        );
    }

    #[test]
    fn test_history_rows_carry_their_own_status() {
        let t = base();
        let details = PlantDetails::new(
            plant(),
            vec![
                reading(1, 75.0, t - Duration::hours(2)),
                reading(2, 45.0, t - Duration::hours(1)),
                reading(3, 20.0, t),
            ],
        );

        let statuses: Vec<PlantStatus> = details.history().iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![PlantStatus::NeedsWater, PlantStatus::Ok, PlantStatus::Overwatered]
        );
    }

    #[test]
    fn test_no_readings() {
        let details = PlantDetails::new(plant(), Vec::new());
        assert_eq!(details.status(), PlantStatus::NoData);
        assert!(details.history().is_empty());
        assert_eq!(details.last_moisture_label(), "–");
        assert_eq!(details.last_reading_time(), "–");
        assert_eq!(details.last_reading_short(base()), "Last reading: –");
        assert_eq!(details.ideal_range_label(), "30% - 60%");
        assert_eq!(details.species_label(), "Spathiphyllum");
    }
}
