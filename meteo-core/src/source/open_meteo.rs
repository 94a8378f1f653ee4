use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::format::format_datetime;
use crate::model::{Coordinates, WeatherReading};
use crate::{CurrentWeatherSource, FetchError};

const OPEN_METEO_BASE_URL: &str = "https://api.open-meteo.com";

/// Client for the Open-Meteo forecast endpoint.
///
/// One GET per call, no retry, no timeout override beyond reqwest's default,
/// no authentication. Every failure is remapped into [`FetchError`] before it
/// leaves this module.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    base_url: String,
}

impl OpenMeteoClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            base_url: OPEN_METEO_BASE_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub fn new_with_base_url(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    async fn fetch_current(&self, coords: Coordinates) -> Result<WeatherReading, FetchError> {
        let url = format!("{}/v1/forecast", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::from_status(status));
        }

        let body = response.text().await?;

        // A 2xx body that does not decode is the unexpected category, not a
        // transport failure.
        let parsed: ForecastResponse =
            serde_json::from_str(&body).map_err(|_| FetchError::Unexpected)?;

        let current = parsed.current_weather.ok_or(FetchError::Unexpected)?;
        let time = format_datetime(&current.time).map_err(|_| FetchError::Unexpected)?;

        Ok(WeatherReading { temperature: current.temperature, time })
    }
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherPayload {
    temperature: f64,
    time: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeatherPayload>,
}

#[async_trait]
impl CurrentWeatherSource for OpenMeteoClient {
    async fn current_weather(
        &self,
        coords: Coordinates,
    ) -> Result<WeatherReading, FetchError> {
        self.fetch_current(coords).await
    }
}
