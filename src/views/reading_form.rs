//! Reading entry form

use serde::Serialize;
use thiserror::Error;

use crate::api::NewReading;
use crate::model::Plant;
use crate::views::route::Route;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load plants. Please refresh the page.";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save reading. Please try again.";

/// One entry of the plant selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlantOption {
    pub id: i64,
    /// "{name} - {species}"
    pub label: String,
}

/// Build selector options from the plant list
pub fn plant_options(plants: &[Plant]) -> Vec<PlantOption> {
    plants
        .iter()
        .map(|plant| PlantOption {
            id: plant.id,
            label: format!("{} - {}", plant.name, plant.species),
        })
        .collect()
}

/// Pick the plant named by the `plant_id` URL parameter, if it is listed
pub fn preselect(options: &[PlantOption], plant_id: Option<i64>) -> Option<i64> {
    let wanted = plant_id?;
    options.iter().any(|o| o.id == wanted).then_some(wanted)
}

/// Raw form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingForm {
    /// Selected option value; empty when nothing is selected
    pub plant_id: String,
    pub moisture_percent: String,
}

impl ReadingForm {
    pub fn new(plant_id: Option<i64>, moisture_percent: impl Into<String>) -> Self {
        Self {
            plant_id: plant_id.map(|id| id.to_string()).unwrap_or_default(),
            moisture_percent: moisture_percent.into(),
        }
    }

    /// Validate and build the request body
    pub fn validate(&self) -> Result<NewReading, ReadingFormErrors> {
        let mut errors = ReadingFormErrors::default();

        let plant_id = self
            .plant_id
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|id| *id > 0);
        if plant_id.is_none() {
            errors.plant = Some(ReadingFieldError::PlantRequired);
        }

        let moisture = self
            .moisture_percent
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| !v.is_nan());
        match moisture {
            None => errors.moisture = Some(ReadingFieldError::MoistureRequired),
            Some(v) if v < 0.0 => errors.moisture = Some(ReadingFieldError::MoistureBelowZero),
            Some(v) if v > 100.0 => {
                errors.moisture = Some(ReadingFieldError::MoistureAboveHundred)
            }
            Some(_) => {}
        }

        match (plant_id, moisture) {
            (Some(plant_id), Some(moisture_percent)) if errors.is_empty() => Ok(NewReading {
                plant_id,
                moisture_percent,
            }),
            _ => Err(errors),
        }
    }
}

/// Where to go after a reading is saved.
///
/// Plant-scoped entry returns to that plant's details page.
pub fn redirect_after_save(scoped_plant: Option<i64>, saved: &NewReading) -> Route {
    match scoped_plant {
        Some(_) => Route::PlantDetails(saved.plant_id),
        None => Route::Dashboard,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum ReadingFieldError {
    #[error("Please select a plant.")]
    PlantRequired,

    #[error("Moisture percentage is required.")]
    MoistureRequired,

    #[error("Moisture percentage cannot be less than 0%.")]
    MoistureBelowZero,

    #[error("Moisture percentage cannot exceed 100%.")]
    MoistureAboveHundred,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize)]
#[error("invalid reading form")]
pub struct ReadingFormErrors {
    pub plant: Option<ReadingFieldError>,
    pub moisture: Option<ReadingFieldError>,
}

impl ReadingFormErrors {
    pub fn is_empty(&self) -> bool {
        self.plant.is_none() && self.moisture.is_none()
    }

    pub fn messages(&self) -> Vec<String> {
        [self.plant, self.moisture]
            .into_iter()
            .flatten()
            .map(|e| e.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plants() -> Vec<Plant> {
        serde_json::from_str(
            r#"[
                {"id": 3, "name": "Snake Plant", "species": "Sansevieria",
                 "ideal_moisture_min": 10, "ideal_moisture_max": 30},
                {"id": 5, "name": "Fern", "species": "",
                 "ideal_moisture_min": 50, "ideal_moisture_max": 80}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_options_and_preselect() {
        let options = plant_options(&plants());
        assert_eq!(options[0].label, "Snake Plant - Sansevieria");
        assert_eq!(options[1].label, "Fern - Unknown");

        assert_eq!(preselect(&options, Some(5)), Some(5));
        assert_eq!(preselect(&options, Some(99)), None);
        assert_eq!(preselect(&options, None), None);
    }

    #[test]
    fn test_out_of_range_moisture_rejected() {
        let errors = ReadingForm::new(Some(3), "150").validate().unwrap_err();
        assert_eq!(errors.moisture, Some(ReadingFieldError::MoistureAboveHundred));
        assert!(errors.plant.is_none());

        let errors = ReadingForm::new(Some(3), "-0.5").validate().unwrap_err();
        assert_eq!(errors.moisture, Some(ReadingFieldError::MoistureBelowZero));
    }

    #[test]
    fn test_infinite_moisture_is_out_of_range() {
        let errors = ReadingForm::new(Some(3), "inf").validate().unwrap_err();
        assert_eq!(errors.moisture, Some(ReadingFieldError::MoistureAboveHundred));

        let errors = ReadingForm::new(Some(3), "Infinity").validate().unwrap_err();
        assert_eq!(errors.moisture, Some(ReadingFieldError::MoistureAboveHundred));

        let errors = ReadingForm::new(Some(3), "-inf").validate().unwrap_err();
        assert_eq!(errors.moisture, Some(ReadingFieldError::MoistureBelowZero));
    }

    #[test]
    fn test_missing_values_rejected() {
        let errors = ReadingForm::new(None, "").validate().unwrap_err();
        assert_eq!(errors.plant, Some(ReadingFieldError::PlantRequired));
        assert_eq!(errors.moisture, Some(ReadingFieldError::MoistureRequired));
        assert_eq!(
            errors.messages(),
            vec![
                "Please select a plant.".to_string(),
                "Moisture percentage is required.".to_string()
            ]
        );

        let errors = ReadingForm::new(Some(3), "NaN").validate().unwrap_err();
        assert_eq!(errors.moisture, Some(ReadingFieldError::MoistureRequired));
    }

    #[test]
    fn test_valid_reading() {
        let reading = ReadingForm::new(Some(3), " 42.5 ").validate().unwrap();
        assert_eq!(reading, NewReading { plant_id: 3, moisture_percent: 42.5 });

        assert!(ReadingForm::new(Some(3), "0").validate().is_ok());
        assert!(ReadingForm::new(Some(3), "100").validate().is_ok());
    }

    #[test]
    fn test_redirect_after_save() {
        let saved = NewReading { plant_id: 3, moisture_percent: 40.0 };
        assert_eq!(redirect_after_save(Some(3), &saved), Route::PlantDetails(3));
        assert_eq!(redirect_after_save(None, &saved), Route::Dashboard);
    }
}
