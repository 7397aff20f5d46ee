//! Native Backend Client
//!
//! `reqwest`-based client for the plant-monitoring REST API and the page
//! flows built on top of it.
//!
//! ## Architecture
//!
//! - **PlantApi**: async trait over the backend calls
//! - **PlantClient**: the HTTP implementation
//! - **flows**: load/submit/delete sequences for each page, combining the
//!   pure view-models with backend calls

mod error;
pub mod flows;
mod http;

pub use error::{ClientError, ClientResult};
pub use flows::{DeleteOutcome, ReadingsFetch, SubmitError};
pub use http::{PlantClient, REQUEST_ID_HEADER};

use async_trait::async_trait;

use crate::api::{NewReading, PlantPayload, ReadingsEndpoint, ReadingsProbe};
use crate::model::{Plant, Reading};

/// Backend operations used by the pages
#[async_trait]
pub trait PlantApi: Send + Sync {
    /// `GET /dashboard`
    async fn dashboard(&self) -> ClientResult<Vec<Plant>>;

    /// `GET /plants`
    async fn list_plants(&self) -> ClientResult<Vec<Plant>>;

    /// `GET /plants/{id}`
    async fn get_plant(&self, id: i64) -> ClientResult<Plant>;

    /// `POST /plants`
    async fn create_plant(&self, payload: &PlantPayload) -> ClientResult<Plant>;

    /// `PUT /plants/{id}`
    async fn update_plant(&self, id: i64, payload: &PlantPayload) -> ClientResult<Plant>;

    /// `DELETE /plants/{id}`
    async fn delete_plant(&self, id: i64) -> ClientResult<()>;

    /// Fetch a reading history from one specific endpoint shape
    async fn readings_from(&self, endpoint: ReadingsEndpoint, plant_id: i64) -> ClientResult<Vec<Reading>>;

    /// Capability-detection state for the readings endpoint
    fn readings_probe(&self) -> &ReadingsProbe;

    /// `POST /readings`
    async fn create_reading(&self, reading: &NewReading) -> ClientResult<Reading>;
}
