//! Endpoint paths
//!
//! Paths are relative to the configured API base URL.

use std::sync::atomic::{AtomicU8, Ordering};

pub fn dashboard() -> String {
    "/dashboard".to_string()
}

pub fn plants() -> String {
    "/plants".to_string()
}

pub fn plant(id: i64) -> String {
    format!("/plants/{}", id)
}

pub fn readings() -> String {
    "/readings".to_string()
}

/// Join a base URL and an endpoint path, tolerating a trailing slash
pub fn join(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Where a plant's reading history can be fetched from.
///
/// Backends have exposed the history under two shapes over time. Clients
/// try the candidates in preference order and use the first that answers
/// with a 2xx; see [`ReadingsProbe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingsEndpoint {
    /// `GET /readings/{plant_id}`
    ByReadings,
    /// `GET /plants/{plant_id}/readings`
    ByPlant,
}

impl ReadingsEndpoint {
    /// Default order: primary first, then fallback
    pub const PREFERENCE: [ReadingsEndpoint; 2] =
        [ReadingsEndpoint::ByReadings, ReadingsEndpoint::ByPlant];

    pub fn path(&self, plant_id: i64) -> String {
        match self {
            ReadingsEndpoint::ByReadings => format!("/readings/{}", plant_id),
            ReadingsEndpoint::ByPlant => format!("/plants/{}/readings", plant_id),
        }
    }

    fn index(&self) -> u8 {
        match self {
            ReadingsEndpoint::ByReadings => 0,
            ReadingsEndpoint::ByPlant => 1,
        }
    }
}

impl std::fmt::Display for ReadingsEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadingsEndpoint::ByReadings => write!(f, "/readings/{{id}}"),
            ReadingsEndpoint::ByPlant => write!(f, "/plants/{{id}}/readings"),
        }
    }
}

/// Try-primary-then-secondary capability detection for the readings
/// endpoint.
///
/// Remembers the endpoint that last answered so later fetches try it first.
/// A fresh probe starts with the primary endpoint.
#[derive(Debug, Default)]
pub struct ReadingsProbe {
    preferred: AtomicU8,
}

impl ReadingsProbe {
    pub const fn new() -> Self {
        Self {
            preferred: AtomicU8::new(0),
        }
    }

    /// Endpoint tried first on the next fetch
    pub fn preferred(&self) -> ReadingsEndpoint {
        ReadingsEndpoint::PREFERENCE[usize::from(self.preferred.load(Ordering::Relaxed)) % 2]
    }

    /// Candidates in the order they should be tried
    pub fn candidates(&self) -> [ReadingsEndpoint; 2] {
        let first = self.preferred();
        let [a, b] = ReadingsEndpoint::PREFERENCE;
        if first == a {
            [a, b]
        } else {
            [b, a]
        }
    }

    /// Record the endpoint that served a successful fetch
    pub fn record_success(&self, endpoint: ReadingsEndpoint) {
        self.preferred.store(endpoint.index(), Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(plant(7), "/plants/7");
        assert_eq!(ReadingsEndpoint::ByReadings.path(7), "/readings/7");
        assert_eq!(ReadingsEndpoint::ByPlant.path(7), "/plants/7/readings");
    }

    #[test]
    fn test_join_trims_trailing_slash() {
        assert_eq!(join("http://localhost:8000/", "/plants"), "http://localhost:8000/plants");
        assert_eq!(join("/api", "/dashboard"), "/api/dashboard");
    }

    #[test]
    fn test_probe_starts_with_primary() {
        let probe = ReadingsProbe::new();
        assert_eq!(
            probe.candidates(),
            [ReadingsEndpoint::ByReadings, ReadingsEndpoint::ByPlant]
        );
    }

    #[test]
    fn test_probe_remembers_fallback() {
        let probe = ReadingsProbe::new();
        probe.record_success(ReadingsEndpoint::ByPlant);
        assert_eq!(probe.preferred(), ReadingsEndpoint::ByPlant);
        assert_eq!(
            probe.candidates(),
            [ReadingsEndpoint::ByPlant, ReadingsEndpoint::ByReadings]
        );

        probe.record_success(ReadingsEndpoint::ByReadings);
        assert_eq!(probe.preferred(), ReadingsEndpoint::ByReadings);
    }
}
