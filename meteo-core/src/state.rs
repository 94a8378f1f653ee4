use tokio::sync::watch;

use crate::model::{Coordinates, WeatherReading};
use crate::source::CurrentWeatherSource;

/// Observable state for the presentation layer.
///
/// Three independent slots, each backed by a [`watch`] channel: the most
/// recent reading, a loading flag, and the last classified error message.
/// Setters replace the slot value and wake subscribers; nothing here couples
/// the slots to each other — [`DisplayState::refresh`] is the one place that
/// keeps them consistent around a fetch.
#[derive(Debug)]
pub struct DisplayState {
    data: watch::Sender<Option<WeatherReading>>,
    loading: watch::Sender<bool>,
    error: watch::Sender<Option<String>>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self {
            data: watch::Sender::new(None),
            loading: watch::Sender::new(false),
            error: watch::Sender::new(None),
        }
    }

    pub fn set_data(&self, reading: Option<WeatherReading>) {
        self.data.send_replace(reading);
    }

    pub fn set_loading(&self, loading: bool) {
        self.loading.send_replace(loading);
    }

    pub fn set_error(&self, message: Option<String>) {
        self.error.send_replace(message);
    }

    pub fn data(&self) -> Option<WeatherReading> {
        self.data.borrow().clone()
    }

    pub fn loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    pub fn subscribe_data(&self) -> watch::Receiver<Option<WeatherReading>> {
        self.data.subscribe()
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    pub fn subscribe_error(&self) -> watch::Receiver<Option<String>> {
        self.error.subscribe()
    }

    /// Run one fetch and keep the slots consistent around it.
    ///
    /// Loading goes up and any stale error is cleared before the request;
    /// afterwards either the data slot holds the fresh reading or the error
    /// slot holds the classified message (and the data slot is cleared).
    /// Loading always comes back down. Overlapping calls are permitted;
    /// whichever settles last wins.
    pub async fn refresh(&self, source: &dyn CurrentWeatherSource, coords: Coordinates) {
        self.set_loading(true);
        self.set_error(None);

        match source.current_weather(coords).await {
            Ok(reading) => {
                self.set_data(Some(reading));
            }
            Err(err) => {
                self.set_data(None);
                self.set_error(Some(err.message().to_string()));
            }
        }

        self.set_loading(false);
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FetchError;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct StubSource(Result<WeatherReading, FetchError>);

    #[async_trait]
    impl CurrentWeatherSource for StubSource {
        async fn current_weather(
            &self,
            _coords: Coordinates,
        ) -> Result<WeatherReading, FetchError> {
            self.0.clone()
        }
    }

    fn reading() -> WeatherReading {
        WeatherReading { temperature: 3.4, time: "2024-01-15 12:00".to_string() }
    }

    #[test]
    fn slots_start_empty() {
        let state = DisplayState::new();
        assert_eq!(state.data(), None);
        assert!(!state.loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn clearing_data_does_not_retain_prior_value() {
        let state = DisplayState::new();
        state.set_data(Some(reading()));
        assert_eq!(state.data(), Some(reading()));

        state.set_data(None);
        assert_eq!(state.data(), None);
    }

    #[tokio::test]
    async fn subscribers_observe_replacement() {
        let state = DisplayState::new();
        let mut rx = state.subscribe_data();

        state.set_data(Some(reading()));
        rx.changed().await.expect("sender still alive");
        assert_eq!(rx.borrow().clone(), Some(reading()));
    }

    #[tokio::test]
    async fn refresh_success_populates_data() {
        let state = DisplayState::new();
        state.set_error(Some("stale".to_string()));

        let source = StubSource(Ok(reading()));
        state.refresh(&source, Coordinates::new(52.52, 13.41)).await;

        assert_eq!(state.data(), Some(reading()));
        assert_eq!(state.error(), None);
        assert!(!state.loading());
    }

    #[tokio::test]
    async fn refresh_failure_stores_classified_message_and_clears_data() {
        let state = DisplayState::new();
        state.set_data(Some(reading()));

        let source = StubSource(Err(FetchError::NoResponse));
        state.refresh(&source, Coordinates::new(52.52, 13.41)).await;

        assert_eq!(state.data(), None);
        assert_eq!(
            state.error(),
            Some("Unable to connect to the server.".to_string())
        );
        assert!(!state.loading());
    }

    #[tokio::test]
    async fn loading_subscriber_sees_the_flag_rise() {
        let state = DisplayState::new();
        let mut rx = state.subscribe_loading();

        state.set_loading(true);
        rx.changed().await.expect("sender still alive");
        assert!(*rx.borrow());
    }
}
