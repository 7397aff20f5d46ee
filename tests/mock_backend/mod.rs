//! Mock plant-monitoring backend for client integration testing
//!
//! Simulates the REST API the dashboard talks to, recording every request
//! so tests can assert which calls were (or were not) made.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Mock backend state
#[derive(Default)]
struct MockState {
    plants: Vec<Value>,
    readings: Vec<Value>,
    next_id: i64,
    requests: Vec<String>,
    request_ids: Vec<String>,
    /// Serve `GET /readings/{id}`; when false it answers 404
    primary_readings: bool,
    /// Answer DELETE with an empty body instead of JSON
    empty_delete_body: bool,
    /// Force every write to fail with this status
    write_failure: Option<StatusCode>,
}

/// Mock plant backend
pub struct MockBackend {
    addr: SocketAddr,
    state: Arc<RwLock<MockState>>,
    handle: JoinHandle<()>,
}

impl MockBackend {
    /// Start a mock backend on a random port
    pub async fn start() -> Self {
        let state = Arc::new(RwLock::new(MockState {
            next_id: 100,
            primary_readings: true,
            ..Default::default()
        }));

        let app = Router::new()
            .route("/dashboard", get(handle_dashboard))
            .route("/plants", get(handle_list_plants).post(handle_create_plant))
            .route(
                "/plants/:id",
                get(handle_get_plant)
                    .put(handle_update_plant)
                    .delete(handle_delete_plant),
            )
            .route("/plants/:id/readings", get(handle_plant_readings))
            .route("/readings/:id", get(handle_readings))
            .route("/readings", post(handle_create_reading))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    /// Base URL for the client config
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Add a plant as the backend would return it on `/dashboard`
    pub async fn add_plant(&self, plant: Value) {
        self.state.write().await.plants.push(plant);
    }

    /// Add a reading to the history
    pub async fn add_reading(&self, plant_id: i64, moisture: f64, timestamp: &str) {
        let mut state = self.state.write().await;
        let id = state.readings.len() as i64 + 1;
        state.readings.push(json!({
            "id": id,
            "plant_id": plant_id,
            "moisture_percent": moisture,
            "timestamp": timestamp,
        }));
    }

    /// Make `GET /readings/{id}` answer 404
    pub async fn disable_primary_readings(&self) {
        self.state.write().await.primary_readings = false;
    }

    pub async fn set_empty_delete_body(&self, empty: bool) {
        self.state.write().await.empty_delete_body = empty;
    }

    pub async fn fail_writes(&self, status: StatusCode) {
        self.state.write().await.write_failure = Some(status);
    }

    /// Requests received so far, as "METHOD /path"
    pub async fn requests(&self) -> Vec<String> {
        self.state.read().await.requests.clone()
    }

    pub async fn clear_requests(&self) {
        self.state.write().await.requests.clear();
    }

    /// `x-request-id` headers received so far
    pub async fn request_ids(&self) -> Vec<String> {
        self.state.read().await.request_ids.clone()
    }

    /// Current plant ids, in storage order
    pub async fn plant_ids(&self) -> Vec<i64> {
        self.state
            .read()
            .await
            .plants
            .iter()
            .filter_map(|p| p["id"].as_i64())
            .collect()
    }

    /// Stop the server
    pub fn stop(self) {
        self.handle.abort();
    }
}

type SharedState = Arc<RwLock<MockState>>;

async fn record(state: &SharedState, headers: &HeaderMap, request: String) {
    let mut state = state.write().await;
    state.requests.push(request);
    if let Some(id) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        state.request_ids.push(id.to_string());
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found"}))).into_response()
}

async fn handle_dashboard(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    record(&state, &headers, "GET /dashboard".to_string()).await;
    Json(state.read().await.plants.clone()).into_response()
}

async fn handle_list_plants(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    record(&state, &headers, "GET /plants".to_string()).await;
    let plants: Vec<Value> = state
        .read()
        .await
        .plants
        .iter()
        .map(|p| {
            json!({
                "id": p["id"],
                "name": p["name"],
                "species": p["species"],
                "ideal_moisture_min": p["ideal_moisture_min"],
                "ideal_moisture_max": p["ideal_moisture_max"],
            })
        })
        .collect();
    Json(plants).into_response()
}

async fn handle_get_plant(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    record(&state, &headers, format!("GET /plants/{}", id)).await;
    let state = state.read().await;
    match state.plants.iter().find(|p| p["id"] == id) {
        Some(plant) => Json(plant.clone()).into_response(),
        None => not_found(),
    }
}

async fn handle_create_plant(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Response {
    record(&state, &headers, "POST /plants".to_string()).await;
    let mut state = state.write().await;
    if let Some(status) = state.write_failure {
        return (status, Json(json!({"detail": "Write failed"}))).into_response();
    }

    state.next_id += 1;
    body["id"] = json!(state.next_id);
    state.plants.push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn handle_update_plant(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(mut body): Json<Value>,
) -> Response {
    record(&state, &headers, format!("PUT /plants/{}", id)).await;
    let mut state = state.write().await;
    if let Some(status) = state.write_failure {
        return (status, Json(json!({"detail": "Write failed"}))).into_response();
    }

    match state.plants.iter_mut().find(|p| p["id"] == id) {
        Some(plant) => {
            body["id"] = json!(id);
            *plant = body.clone();
            Json(body).into_response()
        }
        None => not_found(),
    }
}

async fn handle_delete_plant(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    record(&state, &headers, format!("DELETE /plants/{}", id)).await;
    let mut state = state.write().await;
    if let Some(status) = state.write_failure {
        // Error status with a body that looks like success
        return (status, Json(json!({"ok": true}))).into_response();
    }

    let before = state.plants.len();
    state.plants.retain(|p| p["id"] != id);
    if state.plants.len() == before {
        return not_found();
    }

    if state.empty_delete_body {
        StatusCode::NO_CONTENT.into_response()
    } else {
        Json(json!({"ok": true})).into_response()
    }
}

fn readings_for(state: &MockState, plant_id: i64) -> Vec<Value> {
    state
        .readings
        .iter()
        .filter(|r| r["plant_id"] == plant_id)
        .cloned()
        .collect()
}

async fn handle_readings(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(plant_id): Path<i64>,
) -> Response {
    record(&state, &headers, format!("GET /readings/{}", plant_id)).await;
    let state = state.read().await;
    if !state.primary_readings {
        return not_found();
    }
    Json(readings_for(&state, plant_id)).into_response()
}

async fn handle_plant_readings(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(plant_id): Path<i64>,
) -> Response {
    record(&state, &headers, format!("GET /plants/{}/readings", plant_id)).await;
    let state = state.read().await;
    Json(readings_for(&state, plant_id)).into_response()
}

async fn handle_create_reading(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    record(&state, &headers, "POST /readings".to_string()).await;
    let mut state = state.write().await;
    if let Some(status) = state.write_failure {
        return (status, Json(json!({"detail": "Write failed"}))).into_response();
    }

    let reading = json!({
        "id": state.readings.len() as i64 + 1,
        "plant_id": body["plant_id"],
        "moisture_percent": body["moisture_percent"],
        "timestamp": "2024-06-01T12:00:00",
    });
    state.readings.push(reading.clone());
    (StatusCode::CREATED, Json(reading)).into_response()
}
