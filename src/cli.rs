//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// pokefetch - PokeAPI learnset and move dataset downloader
///
/// Downloads every pokemon in a fixed ID range from PokeAPI, aggregates
/// the move learnsets per version group, and writes two JSON files.
///
/// Examples:
///   pokefetch
///   pokefetch --count 151 --out-dir res
///   pokefetch --api-url https://pokeapi.co/api/v2 --timeout 60
///   pokefetch --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Number of pokemon to download (IDs 1..=COUNT)
    ///
    /// Can also be set via POKEFETCH_COUNT or .pokefetch.toml.
    #[arg(short, long, default_value = "1025", env = "POKEFETCH_COUNT")]
    pub count: u32,

    /// Base URL of the PokeAPI endpoint
    #[arg(long, default_value = "https://pokeapi.co/api/v2", env = "POKEAPI_URL")]
    pub api_url: String,

    /// Directory the output JSON files are written to
    #[arg(short, long, default_value = "res", value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Request timeout in seconds
    ///
    /// How long to wait for a single API response. Default: from config
    /// or 30s.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .pokefetch.toml in the current directory
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output, no progress bars)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .pokefetch.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.count == 0 {
            return Err("Count must be at least 1".to_string());
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err("API URL must start with 'http://' or 'https://'".to_string());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err("Timeout must be at least 1 second".to_string());
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
