//! Dashboard view-model
//!
//! Owns the plant list fetched from `/dashboard` and the current filter.
//! Search keystrokes and status-filter changes re-filter the cached list;
//! nothing here refetches.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{Plant, PlantStatus, StatusPolicy};
use crate::views::format::format_relative;

/// Status filter selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(PlantStatus),
}

impl StatusFilter {
    /// Parse a filter value ("all" or a status label); unknown values
    /// select everything
    pub fn from_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("all") {
            return StatusFilter::All;
        }
        value
            .parse::<PlantStatus>()
            .map(StatusFilter::Only)
            .unwrap_or(StatusFilter::All)
    }

    /// Value for a `<select>` option
    pub fn value(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn matches(&self, status: PlantStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Search term plus status filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlantFilter {
    /// Text as typed
    input: String,
    /// Trimmed, lowercased `input`
    search: String,
    pub status: StatusFilter,
}

impl PlantFilter {
    pub fn new(search: &str, status: StatusFilter) -> Self {
        let mut filter = Self {
            status,
            ..Self::default()
        };
        filter.set_search(search);
        filter
    }

    /// Store the typed text along with its normalized form
    pub fn set_search(&mut self, search: &str) {
        self.input = search.to_string();
        self.search = search.trim().to_lowercase();
    }

    /// Normalized term used for matching
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Text exactly as typed, for binding back into an input box
    pub fn search_input(&self) -> &str {
        &self.input
    }

    pub fn matches(&self, plant: &Plant, status: PlantStatus) -> bool {
        plant.matches_term(&self.search) && self.status.matches(status)
    }
}

/// Counts shown above the table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub total: usize,
    pub ok: usize,
    pub needs_water: usize,
    pub overwatered: usize,
    pub no_data: usize,
}

impl StatusSummary {
    pub fn count(&self, status: PlantStatus) -> usize {
        match status {
            PlantStatus::Ok => self.ok,
            PlantStatus::NeedsWater => self.needs_water,
            PlantStatus::Overwatered => self.overwatered,
            PlantStatus::NoData => self.no_data,
        }
    }

    fn add(&mut self, status: PlantStatus) {
        self.total += 1;
        match status {
            PlantStatus::Ok => self.ok += 1,
            PlantStatus::NeedsWater => self.needs_water += 1,
            PlantStatus::Overwatered => self.overwatered += 1,
            PlantStatus::NoData => self.no_data += 1,
        }
    }
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardRow {
    pub id: i64,
    pub name: String,
    pub species: String,
    /// e.g. "30% - 60%"
    pub ideal_range: String,
    /// e.g. "5 min ago", or "Unknown"
    pub last_reading: String,
    pub status: PlantStatus,
}

/// View-model for the dashboard page
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    plants: Vec<Plant>,
    filter: PlantFilter,
    policy: StatusPolicy,
}

impl DashboardView {
    /// Build the view from a freshly fetched plant list
    pub fn new(plants: Vec<Plant>, policy: StatusPolicy) -> Self {
        Self {
            plants,
            filter: PlantFilter::default(),
            policy,
        }
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn filter(&self) -> &PlantFilter {
        &self.filter
    }

    pub fn policy(&self) -> StatusPolicy {
        self.policy
    }

    pub fn set_search(&mut self, search: &str) {
        self.filter.set_search(search);
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
    }

    pub fn set_filter(&mut self, filter: PlantFilter) {
        self.filter = filter;
    }

    /// Status shown for a plant
    pub fn status_of(&self, plant: &Plant) -> PlantStatus {
        plant.effective_status(self.policy)
    }

    /// Summary over the whole cached list, independent of the filter
    pub fn summary(&self) -> StatusSummary {
        self.plants
            .iter()
            .fold(StatusSummary::default(), |mut summary, plant| {
                summary.add(self.status_of(plant));
                summary
            })
    }

    /// Plants passing the current filter, in fetch order
    pub fn visible(&self) -> Vec<&Plant> {
        self.plants
            .iter()
            .filter(|plant| self.filter.matches(plant, self.status_of(plant)))
            .collect()
    }

    /// Visible plants as table rows
    pub fn rows(&self, now: DateTime<Utc>) -> Vec<DashboardRow> {
        self.visible()
            .into_iter()
            .map(|plant| DashboardRow {
                id: plant.id,
                name: plant.name.clone(),
                species: plant.species.clone(),
                ideal_range: plant.ideal_range().to_string(),
                last_reading: format_relative(
                    plant.last_reading.as_ref().and_then(|r| r.timestamp),
                    now,
                ),
                status: self.status_of(plant),
            })
            .collect()
    }

    pub fn find(&self, id: i64) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }

    /// Drop a deleted plant from the cache, keeping the others in order
    pub fn remove(&mut self, id: i64) -> Option<Plant> {
        let index = self.plants.iter().position(|p| p.id == id)?;
        Some(self.plants.remove(index))
    }
}

/// Prompt shown before deleting a plant
pub fn delete_prompt(plant: &Plant) -> String {
    format!(
        "Are you sure you want to delete \"{}\"? This cannot be undone.",
        plant.name
    )
}
