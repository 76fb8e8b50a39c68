//! Domain scorer.
//!
//! Classifies one scan record (and its subdomains) into a [`ScoreRecord`]
//! while accumulating organization-wide tallies into [`ComplianceCounters`].
//! Scoring is pure apart from the counter increments; OCSP-excluded domains
//! take every scoring branch but never move a counter.

use crate::models::ScanRecord;
use crate::scoring::counters::{ComplianceCounters, ComplianceDimension};
use crate::scoring::record::{ScoreRecord, WeakCryptoEntry};

/// BOD 18-01 requires an HSTS max-age of at least one year.
const ONE_YEAR_IN_SECONDS: i64 = 31_536_000;

/// Scores one domain record and, when present, its subdomains.
///
/// Only live subdomain scores are retained, in input order. Recursion stops
/// at one level because subdomain records never carry subdomains of their
/// own.
pub fn score_domain(record: &ScanRecord, counters: &mut ComplianceCounters) -> ScoreRecord {
    // OCSP-excluded domains are scored for display but never counted.
    let counted = !record.ocsp_domain;

    let mut score = ScoreRecord {
        domain: record.domain.clone(),
        ocsp_domain: record.ocsp_domain,
        live_bool: record.live,
        ..Default::default()
    };

    if record.live {
        if counted {
            counters.record_eligible(record.is_base_domain);
        } else {
            counters.record_ineligible(&record.domain);
        }
    } else if record.is_base_domain {
        // Non-live subdomains are left off the ineligible list; there are
        // too many of them to be worth reporting.
        counters.record_ineligible(&record.domain);
    }

    score.https_full_connection_bool = record.https_full_connection;
    score.https_client_auth_required_bool = record.https_client_auth_required;

    score.strictly_forces_https_bool = record.strictly_forces_https;
    if record.strictly_forces_https {
        counters.count(ComplianceDimension::StrictlyForcesHttps, counted);
    }

    // A live domain whose base domain is HSTS-preloaded gets credit for
    // supporting and enforcing HTTPS even without a direct signal.
    let preload_credit = record.live && record.hsts_base_domain_preloaded;

    score.domain_supports_https_bool = record.domain_supports_https || preload_credit;
    if score.domain_supports_https_bool {
        counters.count(ComplianceDimension::SupportsHttps, counted);
    }

    score.domain_enforces_https_bool = record.domain_enforces_https || preload_credit;
    if score.domain_enforces_https_bool {
        counters.count(ComplianceDimension::EnforcesHttps, counted);
    }

    // Any bad chain is counted once, but the displayed verdict is only set
    // when the hostname is bad too; when the hostname or expiry verdicts
    // carry the problem on their own, the chain verdict stays absent.
    if record.https_bad_chain && record.https_bad_hostname {
        score.https_bad_chain_bool = Some(true);
        counters.count(ComplianceDimension::HttpsBadChain, counted);
    } else if (record.https_bad_chain && !record.https_bad_hostname)
        || (record.https_bad_chain && record.https_expired_cert)
    {
        score.https_bad_chain_bool = None;
        counters.count(ComplianceDimension::HttpsBadChain, counted);
    } else {
        score.https_bad_chain_bool = Some(false);
    }

    score.https_bad_hostname_bool = record.https_bad_hostname;
    if record.https_bad_hostname {
        counters.count(ComplianceDimension::HttpsBadHostname, counted);
    }

    score.https_expired_cert_bool = record.https_expired_cert;
    if record.https_expired_cert {
        counters.count(ComplianceDimension::HttpsExpiredCert, counted);
    }

    score.redirect_bool = record.redirect;

    score.downgrades_https_bool = record.downgrades_https;
    if record.downgrades_https {
        counters.count(ComplianceDimension::DowngradesHttps, counted);
    }

    score.hsts_base_domain_preloaded_bool = preload_credit;
    if preload_credit {
        counters.count(ComplianceDimension::HstsBaseDomainPreloaded, counted);
    }

    score_hsts(record, counters, counted, &mut score);

    score.domain_has_weak_crypto_bool = record.domain_has_weak_crypto;
    if record.live && !record.domain_has_weak_crypto {
        counters.count(ComplianceDimension::NoWeakCrypto, counted);
    }

    score.hosts_with_weak_crypto = record
        .hosts_with_weak_crypto
        .iter()
        .map(|host| WeakCryptoEntry {
            hostname: host.scanned_hostname.clone(),
            port: host.scanned_port,
            weak_crypto_list_str: host.weak_crypto_names().join(", "),
        })
        .collect();

    score.domain_has_symantec_cert_bool = record.domain_has_symantec_cert;

    // Compliance is judged on the raw scanner flags, not on the credited
    // verdicts above, except for the live+preloaded substitute.
    let bod_1801_compliance = ((record.domain_supports_https
        && record.domain_enforces_https
        && record.domain_uses_strong_hsts)
        || preload_credit)
        && !record.domain_has_weak_crypto;
    score.bod_1801_compliance = bod_1801_compliance;
    if bod_1801_compliance {
        counters.count(ComplianceDimension::Bod1801Compliant, counted);
    }

    for subdomain in &record.subdomains {
        let subdomain_score = score_domain(subdomain, counters);
        if subdomain_score.live_bool {
            score.subdomain_scores.push(subdomain_score);
        }
    }

    score
}

/// The HSTS precedence ladder: a served header is examined for preload
/// status (preloaded supersedes pending/ready) and max-age strength; a
/// missing header can still earn strong-HSTS credit for a live domain whose
/// base domain is preloaded, or one we could not fully connect to because it
/// requires client certificate auth.
fn score_hsts(
    record: &ScanRecord,
    counters: &mut ComplianceCounters,
    counted: bool,
    score: &mut ScoreRecord,
) {
    if record.hsts {
        score.hsts_bool = Some(true);

        if record.hsts_preloaded {
            score.hsts_preloaded_bool = Some(true);
            counters.count(ComplianceDimension::HstsPreloaded, counted);
        } else {
            score.hsts_preloaded_bool = Some(false);
            score.hsts_preload_pending_bool = Some(record.hsts_preload_pending);
            score.hsts_preload_ready_bool = Some(record.hsts_preload_ready);
            if record.hsts_preload_ready {
                counters.count(ComplianceDimension::HstsPreloadReady, counted);
            }
        }

        if record.domain_uses_strong_hsts
            || (record.live && record.hsts_base_domain_preloaded)
        {
            score.domain_uses_strong_hsts_bool = true;
            counters.count(ComplianceDimension::StrongHsts, counted);
        } else {
            score.domain_uses_strong_hsts_bool = false;
            // Near miss: the header is there but expires too soon.
            if record.hsts_max_age > 0 && record.hsts_max_age < ONE_YEAR_IN_SECONDS {
                counters.count(ComplianceDimension::HstsLowMaxAge, counted);
            }
        }
    } else if record.live
        && (record.hsts_base_domain_preloaded
            || (!record.https_full_connection && record.https_client_auth_required))
    {
        // No header seen, but either the base domain is preloaded or the
        // domain requires client auth so we never saw its response headers.
        // Benefit of the doubt; the header sub-verdicts stay absent.
        score.domain_uses_strong_hsts_bool = true;
        counters.count(ComplianceDimension::StrongHsts, counted);
    } else {
        score.hsts_bool = Some(false);
        score.hsts_preloaded_bool = Some(false);
        score.hsts_preload_pending_bool = Some(false);
        score.hsts_preload_ready_bool = Some(false);
        score.domain_uses_strong_hsts_bool = false;
    }
}
