//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.pokefetch.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { verbose: false }
    }
}

/// PokeAPI endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Number of pokemon to download (IDs 1..=count).
    #[serde(default = "default_count")]
    pub count: u32,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            count: default_count(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_count() -> u32 {
    1025
}

fn default_timeout() -> u64 {
    30
}

/// Output file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the JSON files are written to.
    #[serde(default = "default_out_dir")]
    pub dir: String,

    /// File name for the version-group learnset mapping.
    #[serde(default = "default_pokemon_file")]
    pub pokemon_file: String,

    /// File name for the move attribute mapping.
    #[serde(default = "default_moves_file")]
    pub moves_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_out_dir(),
            pokemon_file: default_pokemon_file(),
            moves_file: default_moves_file(),
        }
    }
}

fn default_out_dir() -> String {
    "res".to_string()
}

fn default_pokemon_file() -> String {
    "all_pokemon.json".to_string()
}

fn default_moves_file() -> String {
    "all_moves.json".to_string()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".pokefetch.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    /// This method only overrides config when CLI provides explicit values.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        // API settings - always override since they have defaults in CLI
        self.api.base_url = args.api_url.clone();
        self.api.count = args.count;

        // Timeout - only override if explicitly provided via CLI
        if let Some(timeout) = args.timeout {
            self.api.timeout_seconds = timeout;
        }

        // Output directory
        self.output.dir = args.out_dir.display().to_string();

        // Flags always override
        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
