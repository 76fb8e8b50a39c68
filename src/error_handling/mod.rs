//! Error types for report generation.

pub mod types;

pub use types::{InitializationError, ReportError};
