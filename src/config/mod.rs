//! Application configuration.
//!
//! CLI option types and parsing.

mod types;

pub use types::{Config, LogFormat, LogLevel};
