//! Wildwatch - endangered species detection logging CLI.
//!
//! This crate glues a frame source and an image classifier together with a
//! confidence/cooldown gate and an append-only JSON detection log, plus a
//! log analysis command for the recorded sightings.

#![warn(missing_docs)]
#![allow(clippy::print_stdout)]

pub mod capture;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod gate;
pub mod inference;
pub mod pipeline;
pub mod report;
pub mod species;
pub mod store;

use capture::DirectorySource;
use clap::Parser;
use cli::{Cli, Command, ConfigAction, LogsArgs, WatchArgs};
use config::{
    Config, config_file_path, load_default_config, save_default_config, validate_config,
};
use gate::DetectionGate;
use inference::ManifestClassifier;
use pipeline::{WatchOptions, run_watch};
use report::{LogFilter, export_csv, print_report};
use species::{SpeciesDb, category_for, status_display};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use store::LogStore;
use tracing::{info, warn};

pub use error::{Error, Result};

/// Main entry point for the wildwatch CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let config = load_default_config()?;
    validate_config(&config)?;

    match cli.command {
        Command::Watch(args) => watch_command(&args, &config, cli.quiet),
        Command::Logs(args) => logs_command(&args, &config),
        Command::Species { name, species_file } => {
            species_command(&name, species_file.as_deref(), &config)
        }
        Command::Config { action } => handle_config_command(action),
    }
}

/// Run the capture/inference loop.
fn watch_command(args: &WatchArgs, config: &Config, quiet: bool) -> Result<()> {
    // CLI flags override config values which override defaults.
    let min_confidence = args
        .min_confidence
        .unwrap_or(config.detection.min_confidence);
    let cooldown_secs = args.cooldown_secs.unwrap_or(config.detection.cooldown_secs);
    let interval_ms = args
        .interval_ms
        .unwrap_or(config.detection.frame_interval_ms);
    let excluded = args
        .exclude
        .clone()
        .unwrap_or_else(|| config.detection.excluded_labels.clone());
    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(|| config.paths.log_file.clone());
    let species_file = args
        .species_file
        .clone()
        .unwrap_or_else(|| config.paths.species_file.clone());

    let species = SpeciesDb::load(&species_file)?;
    if !species.is_empty() {
        info!("Loaded metadata for {} species", species.len());
    }

    let classifier = ManifestClassifier::load(&args.predictions)?;
    let mut source = DirectorySource::open(&args.frames, args.loop_frames)?;
    info!(
        "Replaying {} frame(s) from {}",
        source.frame_count(),
        args.frames.display()
    );

    let mut gate = DetectionGate::new(
        min_confidence,
        Duration::from_secs(cooldown_secs),
        excluded,
    );
    let store = LogStore::new(log_file);

    // Cooperative cancellation: Ctrl+C clears the flag, the loop notices on
    // its next iteration.
    let running = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&running);
    if let Err(e) = ctrlc::set_handler(move || flag.store(false, Ordering::Relaxed)) {
        warn!("Failed to install Ctrl+C handler: {e}");
    }

    let options = WatchOptions {
        frame_interval: Duration::from_millis(interval_ms),
        progress_enabled: !quiet,
        ..WatchOptions::default()
    };

    let summary = run_watch(
        &mut source,
        &classifier,
        &mut gate,
        &species,
        &store,
        &running,
        &options,
    )?;

    println!(
        "{} detection(s) logged to {}",
        summary.accepted,
        store.path().display()
    );
    Ok(())
}

/// Analyze the detection log.
fn logs_command(args: &LogsArgs, config: &Config) -> Result<()> {
    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(|| config.paths.log_file.clone());
    let store = LogStore::new(&log_file);

    if !store.exists() {
        println!("No detection logs found. Start detecting animals first.");
        return Ok(());
    }

    let records = store.load_all()?;
    if records.is_empty() {
        println!("No detections recorded yet.");
        return Ok(());
    }

    let filter = LogFilter {
        from: args.from,
        to: args.to,
        category: args.category.clone(),
        min_confidence: args.min_confidence,
    };
    let filtered = filter.apply(&records);

    print_report(&filtered);

    if let Some(export_path) = &args.export {
        export_csv(export_path, &filtered)?;
        println!();
        println!(
            "Exported {} record(s) to {}",
            filtered.len(),
            export_path.display()
        );
    }

    Ok(())
}

/// Look up conservation metadata for one species.
fn species_command(name: &str, species_file: Option<&std::path::Path>, config: &Config) -> Result<()> {
    let path = species_file.map_or_else(|| config.paths.species_file.clone(), Into::into);
    let db = SpeciesDb::load(&path)?;

    let details = db.lookup(name);
    let display = status_display(&details.status);

    println!("Common name:         {name}");
    println!("Scientific name:     {}", details.scientific_name);
    println!(
        "Conservation status: {} {}",
        display.icon, details.status
    );
    println!("Category:            {}", category_for(name));

    Ok(())
}

fn handle_config_command(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let config = Config::default();
                let saved_path = save_default_config(&config)?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}
