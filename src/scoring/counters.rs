//! Organization-wide compliance counters.
//!
//! One `ComplianceCounters` value is created per report run, threaded by
//! mutable reference through the scoring fold, and read exactly once after
//! all base domains (and their subdomains) have been scored.

use log::info;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;

/// A domain that is scored for display but excluded from compliance totals:
/// either a non-live base domain or a live-but-OCSP-excluded domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IneligibleDomain {
    pub domain: String,
}

/// Compliance dimensions tracked per report run.
///
/// Used to enumerate the counters for logging; the counters themselves live
/// as named fields on [`ComplianceCounters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ComplianceDimension {
    SupportsHttps,
    EnforcesHttps,
    StrongHsts,
    NoWeakCrypto,
    Bod1801Compliant,
    StrictlyForcesHttps,
    DowngradesHttps,
    HttpsBadChain,
    HttpsBadHostname,
    HttpsExpiredCert,
    Hsts,
    HstsPreloaded,
    HstsPreloadReady,
    HstsLowMaxAge,
    HstsBaseDomainPreloaded,
    HstsEntireDomain,
}

impl ComplianceDimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceDimension::SupportsHttps => "Supports HTTPS",
            ComplianceDimension::EnforcesHttps => "Enforces HTTPS",
            ComplianceDimension::StrongHsts => "Uses strong HSTS",
            ComplianceDimension::NoWeakCrypto => "No weak crypto",
            ComplianceDimension::Bod1801Compliant => "BOD 18-01 compliant",
            ComplianceDimension::StrictlyForcesHttps => "Strictly forces HTTPS",
            ComplianceDimension::DowngradesHttps => "Downgrades HTTPS",
            ComplianceDimension::HttpsBadChain => "HTTPS bad chain",
            ComplianceDimension::HttpsBadHostname => "HTTPS bad hostname",
            ComplianceDimension::HttpsExpiredCert => "HTTPS expired cert",
            ComplianceDimension::Hsts => "HSTS present",
            ComplianceDimension::HstsPreloaded => "HSTS preloaded",
            ComplianceDimension::HstsPreloadReady => "HSTS preload ready",
            ComplianceDimension::HstsLowMaxAge => "HSTS max-age below one year",
            ComplianceDimension::HstsBaseDomainPreloaded => "Base domain HSTS preloaded",
            ComplianceDimension::HstsEntireDomain => "HSTS entire domain",
        }
    }
}

/// Per-run compliance counters.
///
/// Every increment for a domain is skipped when that domain is OCSP-excluded;
/// that invariant is enforced at the call sites in the scorer, which funnel
/// all counted increments through [`ComplianceCounters::count`].
///
/// `hsts_count` and `hsts_entire_domain_count` are carried in the snapshot
/// and consumed by the percentage summary but are never incremented by any
/// scoring rule; the upstream report template expects the fields.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComplianceCounters {
    pub domain_supports_https_count: usize,
    pub domain_enforces_https_count: usize,
    pub domain_uses_strong_hsts_count: usize,
    pub domain_has_no_weak_crypto_count: usize,
    pub bod_1801_count: usize,
    pub strictly_forces_count: usize,
    pub downgrades_count: usize,
    pub https_bad_chain_count: usize,
    pub https_bad_hostname_count: usize,
    pub https_expired_cert_count: usize,
    pub hsts_count: usize,
    pub hsts_preloaded_count: usize,
    pub hsts_preload_ready_count: usize,
    pub hsts_low_max_age_count: usize,
    pub hsts_base_domain_preloaded_count: usize,
    pub hsts_entire_domain_count: usize,

    /// Live, non-excluded base domains.
    pub eligible_domains_count: usize,
    /// Live, non-excluded subdomains.
    pub eligible_subdomains_count: usize,
    /// Live, non-excluded domains of both levels; the denominator for the
    /// eligible-percentage family.
    pub all_eligible_domains_count: usize,
    pub ineligible_domains: Vec<IneligibleDomain>,
}

impl ComplianceCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments one compliance dimension, but only when `counted` is true.
    ///
    /// Callers pass `counted = !record.ocsp_domain` so that OCSP-excluded
    /// domains are scored without ever moving a counter.
    pub fn count(&mut self, dimension: ComplianceDimension, counted: bool) {
        if !counted {
            return;
        }
        match dimension {
            ComplianceDimension::SupportsHttps => self.domain_supports_https_count += 1,
            ComplianceDimension::EnforcesHttps => self.domain_enforces_https_count += 1,
            ComplianceDimension::StrongHsts => self.domain_uses_strong_hsts_count += 1,
            ComplianceDimension::NoWeakCrypto => self.domain_has_no_weak_crypto_count += 1,
            ComplianceDimension::Bod1801Compliant => self.bod_1801_count += 1,
            ComplianceDimension::StrictlyForcesHttps => self.strictly_forces_count += 1,
            ComplianceDimension::DowngradesHttps => self.downgrades_count += 1,
            ComplianceDimension::HttpsBadChain => self.https_bad_chain_count += 1,
            ComplianceDimension::HttpsBadHostname => self.https_bad_hostname_count += 1,
            ComplianceDimension::HttpsExpiredCert => self.https_expired_cert_count += 1,
            ComplianceDimension::Hsts => self.hsts_count += 1,
            ComplianceDimension::HstsPreloaded => self.hsts_preloaded_count += 1,
            ComplianceDimension::HstsPreloadReady => self.hsts_preload_ready_count += 1,
            ComplianceDimension::HstsLowMaxAge => self.hsts_low_max_age_count += 1,
            ComplianceDimension::HstsBaseDomainPreloaded => {
                self.hsts_base_domain_preloaded_count += 1
            }
            ComplianceDimension::HstsEntireDomain => self.hsts_entire_domain_count += 1,
        }
    }

    /// Returns the count for one dimension.
    pub fn get(&self, dimension: ComplianceDimension) -> usize {
        match dimension {
            ComplianceDimension::SupportsHttps => self.domain_supports_https_count,
            ComplianceDimension::EnforcesHttps => self.domain_enforces_https_count,
            ComplianceDimension::StrongHsts => self.domain_uses_strong_hsts_count,
            ComplianceDimension::NoWeakCrypto => self.domain_has_no_weak_crypto_count,
            ComplianceDimension::Bod1801Compliant => self.bod_1801_count,
            ComplianceDimension::StrictlyForcesHttps => self.strictly_forces_count,
            ComplianceDimension::DowngradesHttps => self.downgrades_count,
            ComplianceDimension::HttpsBadChain => self.https_bad_chain_count,
            ComplianceDimension::HttpsBadHostname => self.https_bad_hostname_count,
            ComplianceDimension::HttpsExpiredCert => self.https_expired_cert_count,
            ComplianceDimension::Hsts => self.hsts_count,
            ComplianceDimension::HstsPreloaded => self.hsts_preloaded_count,
            ComplianceDimension::HstsPreloadReady => self.hsts_preload_ready_count,
            ComplianceDimension::HstsLowMaxAge => self.hsts_low_max_age_count,
            ComplianceDimension::HstsBaseDomainPreloaded => self.hsts_base_domain_preloaded_count,
            ComplianceDimension::HstsEntireDomain => self.hsts_entire_domain_count,
        }
    }

    /// Records eligibility for a live, non-excluded domain.
    pub fn record_eligible(&mut self, is_base_domain: bool) {
        if is_base_domain {
            self.eligible_domains_count += 1;
        } else {
            self.eligible_subdomains_count += 1;
        }
        self.all_eligible_domains_count += 1;
    }

    /// Records a domain that is excluded from compliance totals.
    pub fn record_ineligible(&mut self, domain: &str) {
        self.ineligible_domains.push(IneligibleDomain {
            domain: domain.to_string(),
        });
    }

    /// Logs the nonzero compliance counts after a completed fold.
    pub fn log_summary(&self) {
        info!(
            "Eligibility: {} base domain(s), {} subdomain(s), {} total eligible, {} ineligible",
            self.eligible_domains_count,
            self.eligible_subdomains_count,
            self.all_eligible_domains_count,
            self.ineligible_domains.len()
        );
        for dimension in ComplianceDimension::iter() {
            let count = self.get(dimension);
            if count > 0 {
                info!("   {}: {}", dimension.as_str(), count);
            }
        }
    }
}
