//! pokefetch - PokeAPI learnset and move dataset downloader
//!
//! A CLI tool that downloads every pokemon in a fixed ID range from
//! PokeAPI, aggregates the move learnsets per version group, and writes
//! two JSON files: `res/all_pokemon.json` and `res/all_moves.json`.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (network, parse, or file-write failure)

mod api;
mod cli;
mod collect;
mod config;
mod models;
mod output;

use anyhow::{Context, Result};
use api::{ClientConfig, PokeClient};
use cli::Args;
use collect::Dataset;
use config::Config;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("pokefetch v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // Run the download
    match run_download(args).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Download failed: {:#}", e);
            eprintln!("\nError: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .pokefetch.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(".pokefetch.toml");

    if path.exists() {
        eprintln!(".pokefetch.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .pokefetch.toml")?;

    println!("Created .pokefetch.toml with default settings.");
    println!("Edit it to customize the API endpoint, count, and output paths.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete download workflow.
async fn run_download(args: Args) -> Result<()> {
    let start_time = Instant::now();

    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    let client = PokeClient::new(ClientConfig {
        base_url: config.api.base_url.clone(),
        timeout_seconds: config.api.timeout_seconds,
    })?;

    let count = config.api.count;
    let mut dataset = Dataset::new();

    // Phase 1: fetch every pokemon and fold its learnset into the dataset.
    // Sequential on purpose: one in-flight request at a time.
    println!("Fetching {} pokemon from {}", count, config.api.base_url);

    let progress = make_progress_bar(count as u64, args.quiet);
    for id in 1..=count {
        let pokemon = client.fetch_pokemon(id).await?;
        dataset.ingest_pokemon(&pokemon)?;

        progress.inc(1);
        if id % 100 == 0 {
            info!("Fetched {} of {} pokemon", id, count);
        }
    }
    progress.finish_and_clear();

    // Phase 2: fetch each distinct move exactly once.
    let endpoints = dataset.move_endpoints().clone();
    println!("Fetching {} unique moves", endpoints.len());

    let progress = make_progress_bar(endpoints.len() as u64, args.quiet);
    for (name, url) in &endpoints {
        let move_response = client.fetch_move(url).await?;
        dataset.insert_move(name, &move_response);
        progress.inc(1);
    }
    progress.finish_and_clear();

    // Phase 3: write both documents.
    println!("Writing output files...");
    let written = output::write_dataset(&config.output, &dataset)?;

    let duration = start_time.elapsed().as_secs_f64();
    println!("\nDownload summary:");
    println!("   Pokemon fetched: {}", count);
    println!("   Unique moves fetched: {}", dataset.unique_move_count());
    println!("   Version groups: {}", dataset.version_groups().len());
    println!(
        "   Output: {} and {}",
        written.pokemon_path.display(),
        written.moves_path.display()
    );
    println!("   Duration: {:.1}s", duration);

    Ok(())
}

/// Build a progress bar for a fetch phase, hidden in quiet mode.
fn make_progress_bar(len: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .pokefetch.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
