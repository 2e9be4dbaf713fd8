use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Builds traceable procurement reports from event files.
#[derive(Debug, Parser)]
#[command(name = "mise")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON configuration file.
    #[arg(long, short = 'c', env = "MISE_CONFIG", default_value = "mise.json")]
    pub config: PathBuf,

    /// Log output format.
    #[arg(long, value_enum, default_value = "text")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Select an event file, build the report and write it.
    Run(RunArgs),
    /// Print which event file would be selected.
    Resolve(SelectionArgs),
    /// Show aggregated groups whose item name contains a fragment.
    Inspect(InspectArgs),
}

#[derive(Debug, Clone, Args)]
pub struct SelectionArgs {
    /// Load this file instead of selecting by date.
    #[arg(long)]
    pub event_file: Option<String>,

    /// Use this date (YYYY-MM-DD) as today.
    #[arg(long)]
    pub today: Option<String>,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Write the report here instead of the configured output path.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Text to look for in item names.
    pub fragment: String,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_overrides() {
        let cli = Cli::parse_from([
            "mise",
            "--config",
            "/etc/mise.json",
            "run",
            "--event-file",
            "event_2025-01-01_a.json",
            "--today",
            "2026-06-01",
            "-o",
            "/tmp/out.json",
        ]);

        assert_eq!(cli.config, PathBuf::from("/etc/mise.json"));
        assert_eq!(cli.log_format, LogFormat::Text);
        let Commands::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.selection.event_file.as_deref(), Some("event_2025-01-01_a.json"));
        assert_eq!(args.selection.today.as_deref(), Some("2026-06-01"));
        assert_eq!(args.output, Some(PathBuf::from("/tmp/out.json")));
    }

    #[test]
    fn test_parse_inspect() {
        let cli = Cli::parse_from(["mise", "--log-format", "json", "inspect", "בצל"]);
        assert_eq!(cli.log_format, LogFormat::Json);
        let Commands::Inspect(args) = cli.command else {
            panic!("expected inspect command");
        };
        assert_eq!(args.fragment, "בצל");
        assert!(args.selection.event_file.is_none());
    }
}
