//! Export data types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::scoring::{ComplianceCounters, ComplianceSummary, ScoreRecord};

/// The full report document written as JSON: per-domain scores, the counter
/// snapshot (including the ineligible-domain list), and the percentage
/// summary.
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    pub organization: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    pub generated_time: DateTime<Utc>,
    pub domain_count: usize,
    pub base_domain_count: usize,
    pub subdomain_count: usize,
    pub scores: Vec<ScoreRecord>,
    pub counters: ComplianceCounters,
    pub summary: ComplianceSummary,
}
