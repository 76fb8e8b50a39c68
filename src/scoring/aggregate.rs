//! Aggregate reducer.
//!
//! Folds the scorer over every base domain of an organization (sorted by
//! domain name), then derives the percentage summary from the accumulated
//! counters. Two conditions abort the run with no partial output: an
//! organization with no domain records at all, and one with no eligible
//! (live, non-excluded) domains.

use log::{debug, info};
use serde::Serialize;

use crate::error_handling::ReportError;
use crate::models::ScanRecord;
use crate::scoring::counters::ComplianceCounters;
use crate::scoring::domain::score_domain;
use crate::scoring::record::ScoreRecord;

/// The percentage summary for one organization, rounded to one decimal.
///
/// The first five percentages divide by the eligible-domain count; the last
/// four divide by the raw domain count including ineligible and excluded
/// records. The split matches the upstream report template and is
/// intentional.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComplianceSummary {
    pub uses_https_percentage: f64,
    pub enforces_https_percentage: f64,
    pub hsts_percentage: f64,
    pub has_no_weak_crypto_percentage: f64,
    pub bod_1801_percentage: f64,

    pub strictly_forces_percentage: f64,
    pub downgrades_percentage: f64,
    pub hsts_preloaded_percentage: f64,
    pub hsts_entire_domain_percentage: f64,
}

impl ComplianceSummary {
    /// Derives the summary from a completed fold.
    ///
    /// Callers must have verified `all_eligible_domains_count > 0` and
    /// `domain_count > 0`; the reducer does this before deriving.
    pub fn derive(counters: &ComplianceCounters, domain_count: usize) -> Self {
        let of_eligible = |count: usize| percent(count, counters.all_eligible_domains_count);
        let of_total = |count: usize| percent(count, domain_count);

        ComplianceSummary {
            uses_https_percentage: of_eligible(counters.domain_supports_https_count),
            enforces_https_percentage: of_eligible(counters.domain_enforces_https_count),
            hsts_percentage: of_eligible(counters.domain_uses_strong_hsts_count),
            has_no_weak_crypto_percentage: of_eligible(counters.domain_has_no_weak_crypto_count),
            bod_1801_percentage: of_eligible(counters.bod_1801_count),

            strictly_forces_percentage: of_total(counters.strictly_forces_count),
            downgrades_percentage: of_total(counters.downgrades_count),
            hsts_preloaded_percentage: of_total(counters.hsts_preloaded_count),
            hsts_entire_domain_percentage: of_total(counters.hsts_entire_domain_count),
        }
    }
}

fn percent(count: usize, denominator: usize) -> f64 {
    (count as f64 / denominator as f64 * 100.0 * 10.0).round() / 10.0
}

/// The result of reducing one organization's base domains.
#[derive(Debug, Clone, Serialize)]
pub struct ReduceOutcome {
    pub scores: Vec<ScoreRecord>,
    pub counters: ComplianceCounters,
    pub summary: ComplianceSummary,
    pub domain_count: usize,
    pub base_domain_count: usize,
    pub subdomain_count: usize,
}

/// Scores every base domain (in lexicographic domain order) and derives the
/// organization summary.
pub fn reduce(organization: &str, base_domains: &[ScanRecord]) -> Result<ReduceOutcome, ReportError> {
    let subdomain_count: usize = base_domains.iter().map(|d| d.subdomains.len()).sum();
    let domain_count = base_domains.len() + subdomain_count;
    if domain_count == 0 {
        return Err(ReportError::NoDomains {
            organization: organization.to_string(),
        });
    }

    let mut sorted: Vec<&ScanRecord> = base_domains.iter().collect();
    sorted.sort_by(|a, b| a.domain.cmp(&b.domain));

    let mut counters = ComplianceCounters::new();
    let mut scores = Vec::with_capacity(sorted.len());
    for record in sorted {
        debug!("Scoring {}", record.domain);
        scores.push(score_domain(record, &mut counters));
    }

    if counters.all_eligible_domains_count == 0 {
        return Err(ReportError::NoEligibleDomains {
            organization: organization.to_string(),
        });
    }

    let summary = ComplianceSummary::derive(&counters, domain_count);
    info!(
        "{}: {} of {} eligible domain(s) BOD 18-01 compliant ({}%)",
        organization,
        counters.bod_1801_count,
        counters.all_eligible_domains_count,
        summary.bod_1801_percentage
    );

    Ok(ReduceOutcome {
        scores,
        counters,
        summary,
        domain_count,
        base_domain_count: base_domains.len(),
        subdomain_count,
    })
}
