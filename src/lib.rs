//! # Plantwatch
//!
//! Plant moisture monitoring client - a dashboard of plants with their
//! watering status, forms to add and edit plants and to log readings, and a
//! per-plant reading history, all over a REST backend.
//!
//! ## Features
//!
//! - **Status classification**: needs water / ok / overwatered / no data
//!   from the last reading and the plant's ideal range
//! - **Dashboard**: summary counts plus a searchable, filterable table
//! - **Forms**: validated plant and reading forms that never reach the
//!   network when invalid
//! - **History**: reading history with the readings endpoint fallback
//!
//! ## Modules
//!
//! - [`model`]: Plants, readings and the status classifier
//! - [`views`]: Rendering-agnostic page view-models
//! - [`api`]: REST paths and request bodies
//! - [`client`]: Native async HTTP client and page flows (feature `client`)
//! - [`render`]: Terminal tables and CSV export
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use plantwatch::client::{flows, PlantClient};
//! use plantwatch::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let client = PlantClient::new(&config.api)?;
//!
//!     let mut view = flows::load_dashboard(&client, config.api.status_policy).await?;
//!     view.set_search("fern");
//!
//!     println!("{}", plantwatch::render::dashboard(&view, chrono::Utc::now()));
//!     Ok(())
//! }
//! ```

pub mod api;
#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod model;
pub mod render;
pub mod views;

// Re-export top-level types for convenience
pub use model::{
    classify, LastReading, MoistureRange, Plant, PlantStatus, Reading, StatusPolicy,
};

pub use views::{
    DashboardView, FormMode, PlantDetails, PlantFilter, PlantForm, ReadingForm, Route,
    StatusFilter,
};

pub use api::{NewReading, PlantPayload, ReadingsEndpoint, ReadingsProbe};

#[cfg(feature = "client")]
pub use client::{ClientError, ClientResult, PlantApi, PlantClient};

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig};
