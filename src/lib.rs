//! https_scorecard library: BOD 18-01 HTTPS/HSTS compliance scoring
//!
//! This library ingests per-domain security scan records for one organization
//! and computes a normalized compliance scorecard: per-domain verdicts,
//! organization-wide counters, and the percentage summary required by
//! BOD 18-01 reporting.
//!
//! # Example
//!
//! ```no_run
//! use https_scorecard::{run_report, Config};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     snapshot: PathBuf::from("snapshot.json"),
//!     ocsp_exclusions: None,
//!     output_dir: PathBuf::from("./reports"),
//!     log_level: https_scorecard::LogLevel::Info,
//!     log_format: https_scorecard::LogFormat::Plain,
//! };
//!
//! let outcome = run_report(&config)?;
//! println!("{}: {}% BOD 18-01 compliant",
//!          outcome.organization, outcome.bod_1801_percentage);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error_handling;
pub mod export;
pub mod ingest;
pub mod initialization;
pub mod models;
pub mod scoring;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, ReportError};
pub use run::{run_report, ReportOutcome};

// Internal run module (contains the report orchestration)
mod run {
    use anyhow::{Context, Result};
    use chrono::Utc;
    use log::info;
    use std::path::PathBuf;

    use crate::config::Config;
    use crate::export::{export_report_json, export_results_csv, ReportDocument};
    use crate::ingest::{load_ocsp_exclusions, load_snapshot, materialize, OcspExclusions};
    use crate::scoring::reduce;

    /// Results of a completed report run.
    #[derive(Debug, Clone)]
    pub struct ReportOutcome {
        /// Organization the report covers
        pub organization: String,
        /// Total domain records scored (base domains and subdomains)
        pub domain_count: usize,
        /// Live, non-excluded domains counted toward compliance
        pub eligible_domains: usize,
        /// Share of eligible domains that are BOD 18-01 compliant
        pub bod_1801_percentage: f64,
        /// Path of the JSON report document
        pub report_path: PathBuf,
        /// Path of the CSV results attachment
        pub attachment_path: PathBuf,
    }

    /// Runs a full report: ingest, score, export.
    ///
    /// # Errors
    ///
    /// Fails when the snapshot or exclusion file cannot be read, when the
    /// organization has no domain records or no eligible domains, or when
    /// the output files cannot be written. No partial report is left behind
    /// on the fatal scoring errors; they abort before any file is created.
    pub fn run_report(config: &Config) -> Result<ReportOutcome> {
        let exclusions = match &config.ocsp_exclusions {
            Some(path) => load_ocsp_exclusions(path)
                .with_context(|| format!("Failed to load OCSP exclusions: {}", path.display()))?,
            None => OcspExclusions::default(),
        };

        let snapshot = load_snapshot(&config.snapshot)
            .with_context(|| format!("Failed to load snapshot: {}", config.snapshot.display()))?;
        let records = materialize(snapshot, &exclusions);

        let outcome = reduce(&records.organization, &records.base_domains)
            .context("Failed to score organization")?;
        outcome.counters.log_summary();

        let generated_time = Utc::now();
        let document = ReportDocument {
            organization: records.organization.clone(),
            organization_id: records.organization_id.clone(),
            generated_time,
            domain_count: outcome.domain_count,
            base_domain_count: outcome.base_domain_count,
            subdomain_count: outcome.subdomain_count,
            scores: outcome.scores,
            counters: outcome.counters,
            summary: outcome.summary,
        };

        std::fs::create_dir_all(&config.output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                config.output_dir.display()
            )
        })?;

        let stem = records
            .organization_id
            .as_deref()
            .unwrap_or(&records.organization)
            .replace(' ', "_");
        let datestamp = generated_time.format("%Y-%m-%d");
        let report_path = config
            .output_dir
            .join(format!("{}-{}-https-scorecard.json", stem, datestamp));
        let attachment_path = config
            .output_dir
            .join(format!("{}-{}-https-results.csv", stem, datestamp));

        export_report_json(&document, &report_path)?;
        let attachment_rows = export_results_csv(&records.base_domains, Some(&attachment_path))?;
        info!(
            "Wrote {} and {} ({} row(s))",
            report_path.display(),
            attachment_path.display(),
            attachment_rows
        );

        Ok(ReportOutcome {
            organization: records.organization,
            domain_count: document.domain_count,
            eligible_domains: document.counters.all_eligible_domains_count,
            bod_1801_percentage: document.summary.bod_1801_percentage,
            report_path,
            attachment_path,
        })
    }
}
