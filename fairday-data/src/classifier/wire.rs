//! JSON bodies exchanged with the weather category service.
//!
//! The service exposes `POST /predict`, taking the six measurements by name
//! and answering with a single category label:
//!
//! ```text
//! {"temperature": 12.0, "precipitation": 0.0, "wind": 3.0,
//!  "relative_humidity": 55.0, "altitude": 100.0, "air_pressure": 1013.25}
//! -> {"prediction": "sunny"}
//! ```

use fairday_core::ClassifierInput;
use serde::{Deserialize, Serialize};

/// Request body for `POST /predict`.
#[derive(Debug, Serialize)]
pub struct PredictRequest {
    pub temperature: f64,
    pub precipitation: f64,
    pub wind: f64,
    pub relative_humidity: f64,
    pub altitude: f64,
    pub air_pressure: f64,
}

impl From<&ClassifierInput> for PredictRequest {
    fn from(input: &ClassifierInput) -> Self {
        Self {
            temperature: input.temperature,
            precipitation: input.precipitation,
            wind: input.wind,
            relative_humidity: input.relative_humidity,
            altitude: input.altitude,
            air_pressure: input.air_pressure,
        }
    }
}

/// Response body for `POST /predict`.
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    /// Category label chosen by the model.
    pub prediction: String,
}
