//! Navigation targets shared by the browser router and post-submit
//! redirects

use thiserror::Error;

/// A page of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    AddPlant,
    EditPlant(i64),
    PlantDetails(i64),
    /// Reading entry, optionally scoped to one plant
    AddReading { plant_id: Option<i64> },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Missing plant ID")]
    MissingPlantId,

    #[error("Invalid plant ID: {0}")]
    InvalidPlantId(String),

    #[error("Unknown route: {0}")]
    Unknown(String),
}

impl Route {
    /// Path for links and redirects
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::AddPlant => "/plants/new".to_string(),
            Route::EditPlant(id) => format!("/plants/{}/edit", id),
            Route::PlantDetails(id) => format!("/plants/{}", id),
            Route::AddReading { plant_id: None } => "/readings/new".to_string(),
            Route::AddReading { plant_id: Some(id) } => format!("/readings/new?plant_id={}", id),
        }
    }

    /// Parse a path (with optional query string) back into a route
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let (path, query) = path.split_once('?').unwrap_or((path, ""));
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Ok(Route::Dashboard),
            ["plants", "new"] => Ok(Route::AddPlant),
            ["plants", id] => Ok(Route::PlantDetails(parse_plant_id(Some(*id))?)),
            ["plants", id, "edit"] => Ok(Route::EditPlant(parse_plant_id(Some(*id))?)),
            ["readings", "new"] => {
                let plant_id = query_param(query, "plant_id")
                    .map(|raw| parse_plant_id(Some(raw)))
                    .transpose()?;
                Ok(Route::AddReading { plant_id })
            }
            _ => Err(RouteError::Unknown(path.to_string())),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

/// Parse a plant id taken from a URL parameter
pub fn parse_plant_id(raw: Option<&str>) -> Result<i64, RouteError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    match raw {
        None => Err(RouteError::MissingPlantId),
        Some(s) => s
            .parse::<i64>()
            .map_err(|_| RouteError::InvalidPlantId(s.to_string())),
    }
}

fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
        .filter(|v| !v.is_empty())
}
