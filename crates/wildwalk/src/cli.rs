use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wildwalk")]
#[command(version)]
#[command(about = "Walk waypoints, track wild sightings, notify handlers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start walking and reporting encounters
    Run {
        /// Settings file (defaults to ~/.wildwalk/config.json)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the walk centre latitude
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Override the walk centre longitude
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,

        /// Stop after this many full walks
        #[arg(long)]
        cycles: Option<u64>,
    },

    /// Print the waypoint plan
    Plan {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write a default settings file
    Init {
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print version information
    Version,
}
