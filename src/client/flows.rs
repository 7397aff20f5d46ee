//! Page flows
//!
//! Each flow combines a view-model with the backend calls one page makes.
//! Validation always runs first; an invalid form never reaches the network.

use thiserror::Error;

use super::error::{ClientError, ClientResult};
use super::PlantApi;
use crate::api::ReadingsEndpoint;
use crate::model::{Plant, Reading, StatusPolicy};
use crate::views::plant_form::{FormMode, PlantForm, PlantFormErrors};
use crate::views::reading_form::{self, PlantOption, ReadingForm, ReadingFormErrors};
use crate::views::{DashboardView, PlantDetails, Route};

/// Why a form submission did not complete
#[derive(Debug, Error)]
pub enum SubmitError<E: std::error::Error + 'static> {
    /// Rejected locally; no request was sent
    #[error(transparent)]
    Invalid(E),

    /// The backend call failed; `message` is what the user is told
    #[error("{message}")]
    Failed {
        message: &'static str,
        #[source]
        source: ClientError,
    },
}

/// Result of a delete request from the dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// Deleted on the backend and removed from the cached list
    Deleted(Plant),
    /// The user declined the confirmation prompt
    Cancelled,
    /// No such plant in the cached list
    NotListed,
}

/// Reading history plus the endpoint that served it
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingsFetch {
    pub readings: Vec<Reading>,
    /// `None` when every candidate failed
    pub source: Option<ReadingsEndpoint>,
}

/// Fetch the plant list and build the dashboard
pub async fn load_dashboard(api: &dyn PlantApi, policy: StatusPolicy) -> ClientResult<DashboardView> {
    let plants = api.dashboard().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to load dashboard");
        e
    })?;
    tracing::info!(count = plants.len(), "Loaded dashboard");
    Ok(DashboardView::new(plants, policy))
}

/// Confirm, delete, then drop the plant from the cached list.
///
/// A failed delete leaves the cache untouched.
pub async fn delete_plant(
    api: &dyn PlantApi,
    view: &mut DashboardView,
    id: i64,
    confirm: impl FnOnce(&Plant) -> bool,
) -> ClientResult<DeleteOutcome> {
    let Some(plant) = view.find(id) else {
        return Ok(DeleteOutcome::NotListed);
    };
    if !confirm(plant) {
        return Ok(DeleteOutcome::Cancelled);
    }

    if let Err(e) = api.delete_plant(id).await {
        tracing::error!(plant_id = id, error = %e, "Error deleting plant");
        return Err(e);
    }

    tracing::info!(plant_id = id, "Deleted plant");
    Ok(view
        .remove(id)
        .map(DeleteOutcome::Deleted)
        .unwrap_or(DeleteOutcome::NotListed))
}

/// Load a plant and pre-fill the edit form
pub async fn load_plant_form(api: &dyn PlantApi, id: i64) -> ClientResult<PlantForm> {
    let plant = api.get_plant(id).await.map_err(|e| {
        tracing::error!(plant_id = id, error = %e, "Could not load plant");
        e
    })?;
    Ok(PlantForm::from_plant(&plant))
}

/// Validate and save the plant form; returns where to go next
pub async fn submit_plant(
    api: &dyn PlantApi,
    mode: FormMode,
    form: &PlantForm,
) -> Result<Route, SubmitError<PlantFormErrors>> {
    let payload = form.validate().map_err(SubmitError::Invalid)?;

    let result = match mode {
        FormMode::Create => api.create_plant(&payload).await,
        FormMode::Edit(id) => api.update_plant(id, &payload).await,
    };

    match result {
        Ok(plant) => {
            tracing::info!(plant_id = plant.id, name = %plant.name, "Saved plant");
            Ok(Route::Dashboard)
        }
        Err(source) => {
            tracing::error!(error = %source, mode = ?mode, "Error saving plant");
            Err(SubmitError::Failed {
                message: mode.failure_message(),
                source,
            })
        }
    }
}

/// Selector options for the reading form
pub async fn load_reading_options(api: &dyn PlantApi) -> ClientResult<Vec<PlantOption>> {
    let plants = api.list_plants().await.map_err(|e| {
        tracing::error!(error = %e, "Error loading plants");
        e
    })?;
    Ok(reading_form::plant_options(&plants))
}

/// Validate and save a reading; returns where to go next
pub async fn submit_reading(
    api: &dyn PlantApi,
    form: &ReadingForm,
    scoped_plant: Option<i64>,
) -> Result<Route, SubmitError<ReadingFormErrors>> {
    let reading = form.validate().map_err(SubmitError::Invalid)?;

    match api.create_reading(&reading).await {
        Ok(saved) => {
            tracing::info!(plant_id = saved.plant_id, moisture = saved.moisture_percent, "Logged reading");
            Ok(reading_form::redirect_after_save(scoped_plant, &reading))
        }
        Err(source) => {
            tracing::error!(error = %source, "Error creating reading");
            Err(SubmitError::Failed {
                message: reading_form::SAVE_FAILED_MESSAGE,
                source,
            })
        }
    }
}

/// Fetch a reading history, trying each endpoint shape in the probe's
/// order. Never fails: if every candidate fails the history is empty.
pub async fn fetch_readings(api: &dyn PlantApi, plant_id: i64) -> ReadingsFetch {
    let probe = api.readings_probe();

    for endpoint in probe.candidates() {
        match api.readings_from(endpoint, plant_id).await {
            Ok(readings) => {
                if endpoint != probe.preferred() {
                    tracing::info!(endpoint = %endpoint, "Switching readings endpoint");
                }
                probe.record_success(endpoint);
                return ReadingsFetch {
                    readings,
                    source: Some(endpoint),
                };
            }
            Err(e) => {
                tracing::debug!(endpoint = %endpoint, error = %e, "Readings endpoint failed");
            }
        }
    }

    tracing::warn!(plant_id, "Could not load readings");
    ReadingsFetch {
        readings: Vec::new(),
        source: None,
    }
}

/// Fetch a plant and its history for the details page
pub async fn load_details(api: &dyn PlantApi, id: i64) -> ClientResult<PlantDetails> {
    let plant = api.get_plant(id).await.map_err(|e| {
        tracing::error!(plant_id = id, error = %e, "Failed to load plant details");
        e
    })?;
    let fetch = fetch_readings(api, id).await;
    Ok(PlantDetails::new(plant, fetch.readings))
}
