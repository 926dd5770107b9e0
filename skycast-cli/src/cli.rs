use clap::{Parser, Subcommand};

use crate::app;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Current weather for a city or your location")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weather provider API key.
    Configure,

    /// Show current weather for a city.
    City {
        /// City name, e.g. "London".
        name: String,
    },

    /// Show current weather for a coordinate pair.
    Coords {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => app::configure(),
            Some(Command::City { name }) => {
                app::run_once(skycast_core::route::city_query(&name)).await
            }
            Some(Command::Coords { latitude, longitude }) => {
                let query = skycast_core::route::coords_query(
                    &latitude.to_string(),
                    &longitude.to_string(),
                );
                app::run_once(query).await
            }
            None => app::run_interactive().await,
        }
    }
}
