use serde::{Deserialize, Serialize};

/// A latitude/longitude pair, in decimal degrees.
///
/// No range check is performed here. Out-of-range values are sent to the
/// remote service as-is and whatever it answers is classified by
/// [`crate::FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// A single normalized current-weather reading.
///
/// `temperature` is passed through from the provider unchanged (no unit
/// conversion); `time` is already display-formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature: f64,
    pub time: String,
}
