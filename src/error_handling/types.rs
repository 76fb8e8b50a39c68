//! Library error enums.

use thiserror::Error;

/// Errors that abort a report run.
///
/// The first two are the fatal business conditions: an organization with no
/// domain records at all, and one with domains but none eligible for
/// compliance measurement. No partial report is written in either case.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("\"{organization}\" has no domain records - no report generated")]
    NoDomains { organization: String },

    #[error("\"{organization}\" has no live domains - no report generated")]
    NoEligibleDomains { organization: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised during process startup, before any report work begins.
#[derive(Error, Debug)]
pub enum InitializationError {
    #[error("Logger error: {0}")]
    LoggerError(#[from] log::SetLoggerError),
}
