//! HTTP API Client
//!
//! Functions for communicating with the plant-monitoring REST API.
//! Any non-2xx response is an error, whatever its body says.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use plantwatch::api::endpoints::{self, ReadingsProbe};
use plantwatch::api::{NewReading, PlantPayload};
use plantwatch::model::{Plant, Reading, StatusPolicy};

/// Default API base URL, relative to the page origin
pub const DEFAULT_API_BASE: &str = "/api";

const API_BASE_KEY: &str = "plantwatch_api_url";
const STATUS_POLICY_KEY: &str = "plantwatch_status_policy";

/// Readings endpoint detection, shared for the lifetime of the page
static READINGS_PROBE: ReadingsProbe = ReadingsProbe::new();

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn stored(key: &str) -> Option<String> {
    local_storage()?
        .get_item(key)
        .ok()
        .flatten()
        .filter(|value| !value.trim().is_empty())
}

fn store(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    normalize_base(stored(API_BASE_KEY).as_deref())
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    store(API_BASE_KEY, url.trim());
}

/// Get the dashboard status policy from local storage
pub fn get_status_policy() -> StatusPolicy {
    stored(STATUS_POLICY_KEY)
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

pub fn set_status_policy(policy: StatusPolicy) {
    store(STATUS_POLICY_KEY, policy_value(policy));
}

/// Value stored for a policy; matches its `FromStr` spelling
pub fn policy_value(policy: StatusPolicy) -> &'static str {
    match policy {
        StatusPolicy::Server => "server",
        StatusPolicy::Client => "client",
    }
}

fn normalize_base(stored: Option<&str>) -> String {
    stored
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

fn url(path: &str) -> String {
    endpoints::join(&get_api_base(), path)
}

fn check(method: &str, path: &str, response: Response) -> Result<Response, String> {
    if response.ok() {
        Ok(response)
    } else {
        Err(format!("{} {} failed: {}", method, path, response.status()))
    }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&url(path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    check("GET", path, response)?
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

async fn send_json<B, T>(builder: RequestBuilder, method: &str, path: &str, body: &B) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = builder
        .json(body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    check(method, path, response)?
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ API Functions ============

/// Fetch all plants with status and last reading attached
pub async fn fetch_dashboard() -> Result<Vec<Plant>, String> {
    get_json(&endpoints::dashboard()).await
}

/// Fetch all plants
pub async fn fetch_plants() -> Result<Vec<Plant>, String> {
    get_json(&endpoints::plants()).await
}

/// Fetch one plant
pub async fn fetch_plant(id: i64) -> Result<Plant, String> {
    get_json(&endpoints::plant(id)).await
}

pub async fn create_plant(payload: &PlantPayload) -> Result<Plant, String> {
    let path = endpoints::plants();
    send_json(Request::post(&url(&path)), "POST", &path, payload).await
}

pub async fn update_plant(id: i64, payload: &PlantPayload) -> Result<Plant, String> {
    let path = endpoints::plant(id);
    send_json(Request::put(&url(&path)), "PUT", &path, payload).await
}

/// Delete a plant; the response body may be empty
pub async fn delete_plant(id: i64) -> Result<(), String> {
    let path = endpoints::plant(id);
    let response = Request::delete(&url(&path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let text = check("DELETE", &path, response)?
        .text()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !text.trim().is_empty() {
        serde_json::from_str::<serde_json::Value>(&text)
            .map_err(|e| format!("Parse error: {}", e))?;
    }
    Ok(())
}

/// Fetch a plant's reading history.
///
/// Tries the remembered endpoint first, then the other one. If both fail
/// the history is empty.
pub async fn fetch_readings(plant_id: i64) -> Vec<Reading> {
    for endpoint in READINGS_PROBE.candidates() {
        match get_json::<Vec<Reading>>(&endpoint.path(plant_id)).await {
            Ok(readings) => {
                READINGS_PROBE.record_success(endpoint);
                return readings;
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("Readings from {} failed: {}", endpoint, e).into());
            }
        }
    }

    web_sys::console::error_1(&format!("Could not load readings for plant {}", plant_id).into());
    Vec::new()
}

/// Log a reading
pub async fn create_reading(reading: &NewReading) -> Result<Reading, String> {
    let path = endpoints::readings();
    send_json(Request::post(&url(&path)), "POST", &path, reading).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(None), "/api");
        assert_eq!(normalize_base(Some("  ")), "/api");
        assert_eq!(normalize_base(Some("http://plants.local:8000/")), "http://plants.local:8000");
    }

    #[test]
    fn test_policy_value_parses_back() {
        for policy in [StatusPolicy::Server, StatusPolicy::Client] {
            assert_eq!(policy_value(policy).parse::<StatusPolicy>().unwrap(), policy);
        }
    }
}
