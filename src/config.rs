//! Configuration

use std::path::PathBuf;

use clap::Parser;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Tier editor configuration
#[derive(Debug, Parser)]
#[command(
    name = "tier-editor",
    about = "Replay product edits against a catalog",
    long_about = None
)]
pub struct Config {
    /// Catalog YAML file
    #[arg(short, long, env = "TIER_EDITOR_CATALOG")]
    pub catalog: PathBuf,

    /// Action script YAML file; without one the catalog is printed as loaded
    #[arg(short, long, env = "TIER_EDITOR_SCRIPT")]
    pub script: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from the environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
