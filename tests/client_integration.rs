//! Client integration tests
//!
//! Runs the HTTP client and page flows against a mock backend.

mod mock_backend;

use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use mock_backend::MockBackend;
use serde_json::json;

use plantwatch::client::flows::{self, DeleteOutcome, SubmitError};
use plantwatch::client::{ClientError, PlantApi, PlantClient};
use plantwatch::config::ApiConfig;
use plantwatch::model::{PlantStatus, StatusPolicy};
use plantwatch::views::{FormMode, PlantForm, ReadingForm, Route, StatusFilter};
use plantwatch::ReadingsEndpoint;

async fn backend_with_garden() -> MockBackend {
    let backend = MockBackend::start().await;
    backend
        .add_plant(json!({
            "id": 3,
            "name": "Snake Plant",
            "species": "Sansevieria",
            "ideal_moisture_min": 20,
            "ideal_moisture_max": 40,
            "latest_reading": 30.0,
            "last_reading": {"moisture_percent": 30.0, "timestamp": "2024-06-01T10:00:00"},
            "status": "ok",
        }))
        .await;
    backend
        .add_plant(json!({
            "id": 7,
            "name": "Boston Fern",
            "species": "Nephrolepis",
            "ideal_moisture_min": 30,
            "ideal_moisture_max": 60,
            "latest_reading": 20.0,
            "last_reading": {"moisture_percent": 20.0, "timestamp": "2024-06-01T11:00:00"},
            "status": "needs water",
        }))
        .await;
    backend
        .add_plant(json!({
            "id": 9,
            "name": "Aloe",
            "species": "",
            "ideal_moisture_min": 10,
            "ideal_moisture_max": 30,
            "latest_reading": null,
            "last_reading": null,
            "status": "no_data",
        }))
        .await;
    backend
}

fn client_for(backend: &MockBackend) -> PlantClient {
    let config = ApiConfig {
        base_url: backend.base_url(),
        ..ApiConfig::default()
    };
    PlantClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_dashboard_summary_and_filters() {
    let backend = backend_with_garden().await;
    let client = client_for(&backend);

    let mut view = flows::load_dashboard(&client, StatusPolicy::Server).await.unwrap();
    let summary = view.summary();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.ok, 1);
    assert_eq!(summary.needs_water, 1);
    assert_eq!(summary.no_data, 1);

    view.set_status_filter(StatusFilter::Only(PlantStatus::NeedsWater));
    let names: Vec<&str> = view.visible().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Boston Fern"]);

    view.set_status_filter(StatusFilter::All);
    view.set_search("SANSE");
    let names: Vec<&str> = view.visible().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Snake Plant"]);

    // Empty species is reported as Unknown
    assert_eq!(view.find(9).unwrap().species, "Unknown");

    backend.stop();
}

#[tokio::test]
async fn test_naive_timestamps_are_utc() {
    let backend = backend_with_garden().await;
    let client = client_for(&backend);

    let plants = client.dashboard().await.unwrap();
    let fern = plants.iter().find(|p| p.id == 7).unwrap();
    assert_eq!(
        fern.last_reading.as_ref().and_then(|r| r.timestamp),
        Some(Utc.with_ymd_and_hms(2024, 6, 1, 11, 0, 0).unwrap())
    );

    backend.stop();
}

#[tokio::test]
async fn test_delete_removes_only_that_row() {
    let backend = backend_with_garden().await;
    let client = client_for(&backend);

    let mut view = flows::load_dashboard(&client, StatusPolicy::Server).await.unwrap();
    backend.clear_requests().await;

    let outcome = flows::delete_plant(&client, &mut view, 7, |_| true).await.unwrap();
    assert!(matches!(outcome, DeleteOutcome::Deleted(ref p) if p.name == "Boston Fern"));

    let ids: Vec<i64> = view.plants().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 9]);
    assert_eq!(backend.plant_ids().await, vec![3, 9]);
    // No reload after delete
    assert_eq!(backend.requests().await, vec!["DELETE /plants/7"]);

    backend.stop();
}

#[tokio::test]
async fn test_delete_accepts_empty_body() {
    let backend = backend_with_garden().await;
    backend.set_empty_delete_body(true).await;
    let client = client_for(&backend);

    client.delete_plant(3).await.unwrap();
    assert_eq!(backend.plant_ids().await, vec![7, 9]);

    backend.stop();
}

#[tokio::test]
async fn test_error_status_fails_regardless_of_body() {
    let backend = backend_with_garden().await;
    backend.fail_writes(StatusCode::INTERNAL_SERVER_ERROR).await;
    let client = client_for(&backend);

    let mut view = flows::load_dashboard(&client, StatusPolicy::Server).await.unwrap();
    let err = flows::delete_plant(&client, &mut view, 7, |_| true).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(view.plants().len(), 3);

    backend.stop();
}

#[tokio::test]
async fn test_invalid_forms_issue_no_post() {
    let backend = backend_with_garden().await;
    let client = client_for(&backend);

    let form = PlantForm {
        name: "Fi".to_string(),
        ..PlantForm::default()
    };
    let err = flows::submit_plant(&client, FormMode::Create, &form).await.unwrap_err();
    assert!(matches!(err, SubmitError::Invalid(_)));

    let reading = ReadingForm::new(Some(7), "150");
    let err = flows::submit_reading(&client, &reading, Some(7)).await.unwrap_err();
    assert!(matches!(err, SubmitError::Invalid(_)));

    assert!(backend.requests().await.is_empty());

    backend.stop();
}

#[tokio::test]
async fn test_create_and_edit_plant() {
    let backend = backend_with_garden().await;
    let client = client_for(&backend);

    let form = PlantForm {
        name: "  Monstera  ".to_string(),
        species: String::new(),
        ideal_moisture_min: 40,
        ideal_moisture_max: 70,
    };
    let next = flows::submit_plant(&client, FormMode::Create, &form).await.unwrap();
    assert_eq!(next, Route::Dashboard);

    let created = client.get_plant(101).await.unwrap();
    assert_eq!(created.name, "Monstera");
    assert_eq!(created.species, "Unknown");

    let mut edit = flows::load_plant_form(&client, 101).await.unwrap();
    edit.ideal_moisture_max = 80;
    flows::submit_plant(&client, FormMode::Edit(101), &edit).await.unwrap();
    assert_eq!(client.get_plant(101).await.unwrap().ideal_moisture_max, 80);

    backend.stop();
}

#[tokio::test]
async fn test_failed_save_reports_message() {
    let backend = backend_with_garden().await;
    backend.fail_writes(StatusCode::BAD_REQUEST).await;
    let client = client_for(&backend);

    let form = PlantForm {
        name: "Monstera".to_string(),
        ..PlantForm::default()
    };
    let err = flows::submit_plant(&client, FormMode::Create, &form).await.unwrap_err();
    match err {
        SubmitError::Failed { message, source } => {
            assert_eq!(message, "Failed to create plant. Please try again.");
            assert!(matches!(source, ClientError::Status { status: 400, .. }));
        }
        other => panic!("expected backend failure, got {:?}", other),
    }

    backend.stop();
}

#[tokio::test]
async fn test_log_reading_redirects() {
    let backend = backend_with_garden().await;
    let client = client_for(&backend);

    let form = ReadingForm::new(Some(7), "42.5");
    let next = flows::submit_reading(&client, &form, Some(7)).await.unwrap();
    assert_eq!(next, Route::PlantDetails(7));

    let next = flows::submit_reading(&client, &form, None).await.unwrap();
    assert_eq!(next, Route::Dashboard);

    let details = flows::load_details(&client, 7).await.unwrap();
    assert_eq!(details.readings().len(), 2);
    assert_eq!(details.status(), PlantStatus::Ok);

    backend.stop();
}

#[tokio::test]
async fn test_readings_fallback_and_memory() {
    let backend = backend_with_garden().await;
    backend.add_reading(7, 20.0, "2024-06-01T08:00:00").await;
    backend.add_reading(7, 75.0, "2024-06-01T09:00:00Z").await;
    backend.disable_primary_readings().await;
    let client = client_for(&backend);

    let fetch = flows::fetch_readings(&client, 7).await;
    assert_eq!(fetch.source, Some(ReadingsEndpoint::ByPlant));
    assert_eq!(fetch.readings.len(), 2);

    let details = flows::load_details(&client, 7).await.unwrap();
    // Recomputed from the newest reading, not the backend's "needs water"
    assert_eq!(details.status(), PlantStatus::Overwatered);

    assert_eq!(
        backend.requests().await,
        vec![
            "GET /readings/7",
            "GET /plants/7/readings",
            "GET /plants/7",
            "GET /plants/7/readings",
        ]
    );

    backend.stop();
}

#[tokio::test]
async fn test_missing_plant_details() {
    let backend = backend_with_garden().await;
    let client = client_for(&backend);

    let err = flows::load_details(&client, 404).await.unwrap_err();
    assert_eq!(err.status(), Some(404));

    backend.stop();
}

#[tokio::test]
async fn test_requests_carry_unique_ids() {
    let backend = backend_with_garden().await;
    let client = client_for(&backend);

    client.list_plants().await.unwrap();
    client.list_plants().await.unwrap();

    let ids = backend.request_ids().await;
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);

    backend.stop();
}

#[tokio::test]
async fn test_unreachable_backend() {
    let config = ApiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        request_timeout_secs: 2,
        ..ApiConfig::default()
    };
    let client = PlantClient::new(&config).unwrap();

    let err = client.dashboard().await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Unavailable | ClientError::Timeout | ClientError::Request(_)
    ));

    // Read paths degrade to an empty history
    let fetch = flows::fetch_readings(&client, 7).await;
    assert!(fetch.readings.is_empty());
    assert_eq!(fetch.source, None);
}
