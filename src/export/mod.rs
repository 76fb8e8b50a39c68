//! Export functionality for scorecard data.
//!
//! Writes the JSON report document and the CSV results attachment.

mod csv;
mod json;
mod types;

pub use csv::export_results_csv;
pub use json::export_report_json;
pub use types::ReportDocument;
