mod cli;
mod commands;
mod settings;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            lat,
            lon,
            cycles,
        } => commands::run::run(config.as_deref(), lat.zip(lon), cycles),
        Commands::Plan { config } => commands::plan::run(config.as_deref()),
        Commands::Init { config, force } => commands::init::run(config.as_deref(), force),
        Commands::Version => commands::version::run(),
    }
}
