//! Configuration types and CLI options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line configuration for a report run.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "https_scorecard",
    about = "Computes BOD 18-01 HTTPS/HSTS compliance scorecards from per-domain scan records"
)]
pub struct Config {
    /// Organization snapshot JSON file
    pub snapshot: PathBuf,

    /// CSV of OCSP/CRL domains excluded from compliance totals
    #[arg(long)]
    pub ocsp_exclusions: Option<PathBuf>,

    /// Directory the report JSON and CSV attachment are written to
    #[arg(long, default_value = "./reports")]
    pub output_dir: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["https_scorecard", "snapshot.json"]);
        assert_eq!(config.snapshot, PathBuf::from("snapshot.json"));
        assert_eq!(config.output_dir, PathBuf::from("./reports"));
        assert!(config.ocsp_exclusions.is_none());
        assert!(matches!(config.log_level, LogLevel::Info));
        assert!(matches!(config.log_format, LogFormat::Plain));
    }

    #[test]
    fn test_options_parse() {
        let config = Config::parse_from([
            "https_scorecard",
            "snapshot.json",
            "--ocsp-exclusions",
            "ocsp-crl.csv",
            "--output-dir",
            "/tmp/out",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ]);
        assert_eq!(
            config.ocsp_exclusions,
            Some(PathBuf::from("ocsp-crl.csv"))
        );
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert!(matches!(config.log_level, LogLevel::Debug));
        assert!(matches!(config.log_format, LogFormat::Json));
    }
}
