use anyhow::{anyhow, bail};
use clap::{Parser, Subcommand};
use inquire::{CustomType, Text};

use meteo_core::{Config, Coordinates, DisplayState, OpenMeteoClient, SavedLocation};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "Current weather from Open-Meteo")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Save a default location for `meteo show`.
    Configure,

    /// Show the current weather for a location.
    Show {
        /// Latitude in decimal degrees.
        #[arg(long, allow_hyphen_values = true)]
        latitude: Option<f64>,

        /// Longitude in decimal degrees.
        #[arg(long, allow_hyphen_values = true)]
        longitude: Option<f64>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { latitude, longitude } => show(latitude, longitude).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let latitude = CustomType::<f64>::new("Latitude:")
        .with_help_message("Decimal degrees, south of the equator is negative")
        .prompt()?;

    let longitude = CustomType::<f64>::new("Longitude:")
        .with_help_message("Decimal degrees, west of Greenwich is negative")
        .prompt()?;

    let label = Text::new("Label (optional):")
        .prompt_skippable()?
        .filter(|l| !l.trim().is_empty());

    let mut cfg = Config::load()?;
    cfg.set_default_location(SavedLocation { label, latitude, longitude });
    cfg.save()?;

    println!("Saved default location to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(latitude: Option<f64>, longitude: Option<f64>) -> anyhow::Result<()> {
    let coords = match (latitude, longitude) {
        (Some(lat), Some(lon)) => Coordinates::new(lat, lon),
        (None, None) => Config::load()?.default_coordinates().ok_or_else(|| {
            anyhow!(
                "No location given.\n\
                 Hint: pass --latitude/--longitude, or run `meteo configure` to save a default."
            )
        })?,
        _ => bail!("Both --latitude and --longitude are required when either is given."),
    };

    let state = DisplayState::new();
    let client = OpenMeteoClient::new();

    state.refresh(&client, coords).await;

    if let Some(message) = state.error() {
        bail!(message);
    }

    let reading = state
        .data()
        .ok_or_else(|| anyhow!("An unexpected error occurred."))?;

    println!("Temperature: {}°C", reading.temperature);
    println!("As of:       {}", reading.time);

    Ok(())
}
