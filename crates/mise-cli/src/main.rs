//! `mise` - builds traceable procurement reports from event files.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

use cli::{Cli, Commands, LogFormat};

fn init_tracing(format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => tracing::subscriber::set_global_default(
            registry.with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            ),
        )?,
        LogFormat::Json => tracing::subscriber::set_global_default(
            registry.with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            ),
        )?,
    }

    // Route `log` records (catalog adapter) into tracing
    tracing_log::LogTracer::init()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format)?;

    tracing::debug!("Starting mise v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Run(args) => commands::run(&cli.config, args),
        Commands::Resolve(args) => commands::resolve(&cli.config, args),
        Commands::Inspect(args) => commands::inspect(&cli.config, args),
    }
}
