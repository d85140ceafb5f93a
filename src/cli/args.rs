//! CLI argument definitions.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Webcam-driven endangered species detection logging.
#[derive(Debug, Parser)]
#[command(name = "wildwatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output and informational logging.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the capture/inference loop and log detections.
    Watch(WatchArgs),
    /// Analyze the detection log.
    Logs(LogsArgs),
    /// Look up conservation metadata for one species.
    Species {
        /// Species name to look up.
        name: String,
        /// Path to the species metadata file (overrides config).
        #[arg(long, env = "WILDWATCH_SPECIES_FILE")]
        species_file: Option<PathBuf>,
    },
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for the watch command.
#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Directory of image frames to replay as the camera feed.
    #[arg(long, env = "WILDWATCH_FRAMES")]
    pub frames: PathBuf,

    /// JSON prediction manifest mapping frame names to classifications.
    #[arg(long, env = "WILDWATCH_PREDICTIONS")]
    pub predictions: PathBuf,

    /// Minimum confidence for logging (0.0-1.0).
    #[arg(short = 'c', long, value_parser = parse_confidence, env = "WILDWATCH_MIN_CONFIDENCE")]
    pub min_confidence: Option<f32>,

    /// Per-species cooldown in seconds.
    #[arg(long, env = "WILDWATCH_COOLDOWN_SECS")]
    pub cooldown_secs: Option<u64>,

    /// Minimum interval between inference passes in milliseconds.
    #[arg(long, env = "WILDWATCH_INTERVAL_MS")]
    pub interval_ms: Option<u64>,

    /// Labels that are never logged (comma-separated, overrides config).
    #[arg(long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,

    /// Detection log file (overrides config).
    #[arg(long, env = "WILDWATCH_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Species metadata file (overrides config).
    #[arg(long, env = "WILDWATCH_SPECIES_FILE")]
    pub species_file: Option<PathBuf>,

    /// Replay the frame directory in a loop instead of stopping at the end.
    #[arg(long = "loop")]
    pub loop_frames: bool,
}

/// Arguments for the logs command.
#[derive(Debug, Args)]
pub struct LogsArgs {
    /// Detection log file (overrides config).
    #[arg(long, env = "WILDWATCH_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Earliest date to include (YYYY-MM-DD, inclusive).
    #[arg(long, value_parser = parse_date)]
    pub from: Option<NaiveDate>,

    /// Latest date to include (YYYY-MM-DD, inclusive).
    #[arg(long, value_parser = parse_date)]
    pub to: Option<NaiveDate>,

    /// Only include this conservation category.
    #[arg(long)]
    pub category: Option<String>,

    /// Only include records at or above this confidence (0.0-1.0).
    #[arg(short = 'c', long, value_parser = parse_confidence)]
    pub min_confidence: Option<f32>,

    /// Export the filtered table to a CSV file.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Parse and validate confidence value.
fn parse_confidence(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(0.0..=1.0).contains(&value) {
        return Err(format!(
            "confidence must be between 0.0 and 1.0, got {value}"
        ));
    }

    Ok(value)
}

/// Parse a `YYYY-MM-DD` date.
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("'{s}' is not a valid date (expected YYYY-MM-DD)"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_confidence_valid() {
        assert_eq!(parse_confidence("0.5").ok(), Some(0.5));
        assert_eq!(parse_confidence("0.0").ok(), Some(0.0));
        assert_eq!(parse_confidence("1.0").ok(), Some(1.0));
    }

    #[test]
    fn test_parse_confidence_invalid() {
        assert!(parse_confidence("1.5").is_err());
        assert!(parse_confidence("-0.1").is_err());
        assert!(parse_confidence("abc").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-14").ok(),
            NaiveDate::from_ymd_opt(2025, 3, 14)
        );
        assert!(parse_date("14/03/2025").is_err());
        assert!(parse_date("not a date").is_err());
    }

    #[test]
    fn test_cli_parse_watch() {
        let cli = Cli::try_parse_from([
            "wildwatch",
            "watch",
            "--frames",
            "frames/",
            "--predictions",
            "predictions.json",
            "-c",
            "0.95",
            "--loop",
        ]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        match cli.command {
            Command::Watch(args) => {
                assert_eq!(args.frames, PathBuf::from("frames/"));
                assert_eq!(args.min_confidence, Some(0.95));
                assert!(args.loop_frames);
            }
            other => panic!("expected watch command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_logs_with_filters() {
        let cli = Cli::try_parse_from([
            "wildwatch",
            "logs",
            "--from",
            "2025-03-01",
            "--to",
            "2025-03-14",
            "--category",
            "EN(G1)",
            "--export",
            "out.csv",
        ]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        match cli.command {
            Command::Logs(args) => {
                assert_eq!(args.from, NaiveDate::from_ymd_opt(2025, 3, 1));
                assert_eq!(args.category, Some("EN(G1)".to_string()));
                assert_eq!(args.export, Some(PathBuf::from("out.csv")));
            }
            other => panic!("expected logs command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_exclude_list() {
        let cli = Cli::try_parse_from([
            "wildwatch",
            "watch",
            "--frames",
            "frames/",
            "--predictions",
            "p.json",
            "--exclude",
            "Human,Environment,Background",
        ])
        .unwrap();
        match cli.command {
            Command::Watch(args) => {
                assert_eq!(
                    args.exclude,
                    Some(vec![
                        "Human".to_string(),
                        "Environment".to_string(),
                        "Background".to_string()
                    ])
                );
            }
            other => panic!("expected watch command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_config_subcommand() {
        let cli = Cli::try_parse_from(["wildwatch", "config", "show"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["wildwatch"]).is_err());
    }

    #[test]
    fn test_cli_global_verbosity() {
        let cli = Cli::try_parse_from(["wildwatch", "logs", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
