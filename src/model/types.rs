//! Core data types for plants and moisture readings
//!
//! - `Plant`: a monitored plant as returned by `/plants` and `/dashboard`
//! - `LastReading`: the denormalized latest reading attached by `/dashboard`
//! - `Reading`: one timestamped moisture measurement
//! - `MoistureRange`: a plant's ideal `[min, max]` moisture percentage

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::status::{classify, PlantStatus};

/// Species shown when a plant has none recorded
pub const UNKNOWN_SPECIES: &str = "Unknown";

/// Ideal moisture range, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoistureRange {
    pub min: i32,
    pub max: i32,
}

impl MoistureRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Check whether a reading falls inside the range
    pub fn contains(&self, moisture: f64) -> bool {
        moisture >= f64::from(self.min) && moisture <= f64::from(self.max)
    }
}

impl std::fmt::Display for MoistureRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}% - {}%", self.min, self.max)
    }
}

/// How the dashboard decides a plant's status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusPolicy {
    /// Trust the backend's status field; classify the attached last
    /// reading only when the backend sent no status.
    #[default]
    Server,
    /// Always classify the attached last reading locally
    Client,
}

impl std::str::FromStr for StatusPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "server" => Ok(StatusPolicy::Server),
            "client" => Ok(StatusPolicy::Client),
            other => Err(format!("unknown status policy: {}", other)),
        }
    }
}

/// A monitored plant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plant {
    /// Server-assigned identifier
    pub id: i64,
    pub name: String,
    #[serde(default = "default_species", deserialize_with = "species_or_unknown")]
    pub species: String,
    pub ideal_moisture_min: i32,
    pub ideal_moisture_max: i32,
    /// Latest reading, attached by `/dashboard`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reading: Option<LastReading>,
    /// Bare latest moisture value, attached by `/dashboard`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_reading: Option<f64>,
    /// Status computed by the backend, kept as sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

fn default_species() -> String {
    UNKNOWN_SPECIES.to_string()
}

fn species_or_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let species: Option<String> = Option::deserialize(deserializer)?;
    Ok(species
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(default_species))
}

impl Plant {
    /// The plant's ideal moisture range
    pub fn ideal_range(&self) -> MoistureRange {
        MoistureRange::new(self.ideal_moisture_min, self.ideal_moisture_max)
    }

    /// Latest moisture value attached by the backend, if any
    pub fn last_moisture(&self) -> Option<f64> {
        self.last_reading
            .as_ref()
            .map(|r| r.moisture_percent)
            .or(self.latest_reading)
    }

    /// Status as reported by the backend
    pub fn reported_status(&self) -> PlantStatus {
        PlantStatus::from_reported(self.status.as_deref())
    }

    /// Status classified locally from the attached last reading
    pub fn computed_status(&self) -> PlantStatus {
        classify(self.last_moisture(), self.ideal_range())
    }

    /// Status the dashboard shows under the given policy
    pub fn effective_status(&self, policy: StatusPolicy) -> PlantStatus {
        match policy {
            StatusPolicy::Client => self.computed_status(),
            StatusPolicy::Server if self.status.is_some() => self.reported_status(),
            StatusPolicy::Server => self.computed_status(),
        }
    }

    /// Case-insensitive substring match on name or species.
    ///
    /// `term` must already be lowercased and trimmed; an empty term matches.
    pub fn matches_term(&self, term: &str) -> bool {
        term.is_empty()
            || self.name.to_lowercase().contains(term)
            || self.species.to_lowercase().contains(term)
    }
}

/// Latest reading as embedded in dashboard rows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LastReading {
    pub moisture_percent: f64,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// A single timestamped moisture measurement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reading {
    pub id: i64,
    pub plant_id: i64,
    pub moisture_percent: f64,
    #[serde(deserialize_with = "timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// Parse an ISO-8601 timestamp from the backend.
///
/// Accepts RFC 3339 with an offset, or a naive date-time (with or without
/// fractional seconds) which is taken as UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
}

fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => parse_timestamp(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", s))),
    }
}
