use std::fmt::Debug;

use async_trait::async_trait;

use crate::{Coordinates, FetchError, WeatherReading};

pub mod open_meteo;

/// Anything that can answer a current-weather query for a coordinate pair.
///
/// There is exactly one real implementation ([`open_meteo::OpenMeteoClient`]);
/// the trait exists so the display-state orchestration can be driven by a
/// stub in tests.
#[async_trait]
pub trait CurrentWeatherSource: Send + Sync + Debug {
    async fn current_weather(&self, coords: Coordinates) -> Result<WeatherReading, FetchError>;
}
