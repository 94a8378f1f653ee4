//! Core library for the `meteo` current-weather tool.
//!
//! This crate defines:
//! - The Open-Meteo fetch client and its four-way error classification
//! - The display-formatted weather reading model
//! - An observable display state for a presentation layer
//! - Configuration handling (saved default location)
//!
//! It is used by `meteo-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod source;
pub mod state;

pub use config::{Config, SavedLocation};
pub use error::FetchError;
pub use format::format_datetime;
pub use model::{Coordinates, WeatherReading};
pub use source::{CurrentWeatherSource, open_meteo::OpenMeteoClient};
pub use state::DisplayState;
