//! Snapshot ingest and materialization.
//!
//! Turns a raw [`OrganizationSnapshot`] into the record tree the scorer
//! consumes: weak-crypto flags derived from the per-host TLS rows, OCSP
//! exclusion flags applied, and subdomains attached to their base domains
//! in domain order.

pub mod exclusions;

pub use exclusions::{load_ocsp_exclusions, OcspExclusions};

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{info, warn};

use crate::error_handling::ReportError;
use crate::models::{HostScanRecord, OrganizationSnapshot, ScanRecord};

/// The materialized record set for one organization, ready to reduce.
#[derive(Debug, Clone)]
pub struct OrganizationRecords {
    pub organization: String,
    pub organization_id: Option<String>,
    pub base_domains: Vec<ScanRecord>,
    pub domain_count: usize,
    pub base_domain_count: usize,
    pub subdomain_count: usize,
}

/// Reads an organization snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<OrganizationSnapshot, ReportError> {
    let file = File::open(path)?;
    let snapshot: OrganizationSnapshot = serde_json::from_reader(BufReader::new(file))?;
    info!(
        "Loaded snapshot for \"{}\": {} domain record(s), {} host scan row(s)",
        snapshot.organization,
        snapshot.domains.len(),
        snapshot.host_scans.len()
    );
    Ok(snapshot)
}

/// Materializes the snapshot into base-domain records with subdomains
/// attached.
///
/// Weak-crypto and Symantec flags are always re-derived from the host rows;
/// any values the snapshot carried for them are discarded. Subdomain records
/// whose base domain is missing from the snapshot are dropped with a
/// warning.
pub fn materialize(
    snapshot: OrganizationSnapshot,
    exclusions: &OcspExclusions,
) -> OrganizationRecords {
    let mut host_scans_by_domain: HashMap<String, Vec<HostScanRecord>> = HashMap::new();
    for host in snapshot.host_scans {
        host_scans_by_domain
            .entry(host.domain.clone())
            .or_default()
            .push(host);
    }

    let mut base_domains: Vec<ScanRecord> = Vec::new();
    let mut subdomains_by_base: HashMap<String, Vec<ScanRecord>> = HashMap::new();
    for mut record in snapshot.domains {
        enrich_weak_crypto(&mut record, &host_scans_by_domain);
        record.ocsp_domain = exclusions.contains(&record.domain);
        record.subdomains.clear();
        if record.is_base_domain {
            base_domains.push(record);
        } else {
            subdomains_by_base
                .entry(record.base_domain.clone())
                .or_default()
                .push(record);
        }
    }

    for base in &mut base_domains {
        if let Some(mut subs) = subdomains_by_base.remove(&base.domain) {
            subs.sort_by(|a, b| a.domain.cmp(&b.domain));
            base.subdomains = subs;
        }
    }

    for (missing_base, orphans) in subdomains_by_base {
        warn!(
            "Dropping {} subdomain record(s) under \"{}\": base domain not in snapshot",
            orphans.len(),
            missing_base
        );
    }

    let base_domain_count = base_domains.len();
    let subdomain_count: usize = base_domains.iter().map(|d| d.subdomains.len()).sum();
    OrganizationRecords {
        organization: snapshot.organization,
        organization_id: snapshot.organization_id,
        base_domains,
        domain_count: base_domain_count + subdomain_count,
        base_domain_count,
        subdomain_count,
    }
}

fn enrich_weak_crypto(
    record: &mut ScanRecord,
    host_scans_by_domain: &HashMap<String, Vec<HostScanRecord>>,
) {
    record.domain_has_weak_crypto = false;
    record.hosts_with_weak_crypto.clear();
    record.domain_has_symantec_cert = false;

    if let Some(hosts) = host_scans_by_domain.get(&record.domain) {
        for host in hosts {
            if host.has_weak_crypto() {
                record.domain_has_weak_crypto = true;
                record.hosts_with_weak_crypto.push(host.clone());
            }
            if host.is_symantec_cert {
                record.domain_has_symantec_cert = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(name: &str, base: &str, is_base: bool) -> ScanRecord {
        ScanRecord {
            domain: name.to_string(),
            base_domain: base.to_string(),
            is_base_domain: is_base,
            live: true,
            ..Default::default()
        }
    }

    fn snapshot(domains: Vec<ScanRecord>, host_scans: Vec<HostScanRecord>) -> OrganizationSnapshot {
        OrganizationSnapshot {
            organization: "Test Org".to_string(),
            organization_id: None,
            domains,
            host_scans,
        }
    }

    #[test]
    fn test_subdomains_attach_to_their_base_sorted_by_domain() {
        let records = materialize(
            snapshot(
                vec![
                    domain("parent.gov", "parent.gov", true),
                    domain("z.parent.gov", "parent.gov", false),
                    domain("a.parent.gov", "parent.gov", false),
                ],
                vec![],
            ),
            &OcspExclusions::default(),
        );

        assert_eq!(records.base_domain_count, 1);
        assert_eq!(records.subdomain_count, 2);
        assert_eq!(records.domain_count, 3);
        let subs: Vec<&str> = records.base_domains[0]
            .subdomains
            .iter()
            .map(|s| s.domain.as_str())
            .collect();
        assert_eq!(subs, vec!["a.parent.gov", "z.parent.gov"]);
    }

    #[test]
    fn test_orphan_subdomains_are_dropped() {
        let records = materialize(
            snapshot(
                vec![
                    domain("parent.gov", "parent.gov", true),
                    domain("www.other.gov", "other.gov", false),
                ],
                vec![],
            ),
            &OcspExclusions::default(),
        );

        assert_eq!(records.base_domain_count, 1);
        assert_eq!(records.subdomain_count, 0);
        assert_eq!(records.domain_count, 1);
    }

    #[test]
    fn test_weak_crypto_derived_from_host_rows() {
        let weak = HostScanRecord {
            domain: "parent.gov".to_string(),
            scanned_hostname: "parent.gov".to_string(),
            scanned_port: 443,
            any_3des: true,
            ..Default::default()
        };
        let clean = HostScanRecord {
            domain: "parent.gov".to_string(),
            scanned_hostname: "mail.parent.gov".to_string(),
            scanned_port: 25,
            is_symantec_cert: true,
            ..Default::default()
        };

        let records = materialize(
            snapshot(
                vec![domain("parent.gov", "parent.gov", true)],
                vec![weak, clean],
            ),
            &OcspExclusions::default(),
        );

        let base = &records.base_domains[0];
        assert!(base.domain_has_weak_crypto);
        // Only the host with weak crypto joins the rollup list.
        assert_eq!(base.hosts_with_weak_crypto.len(), 1);
        assert_eq!(base.hosts_with_weak_crypto[0].scanned_hostname, "parent.gov");
        // But the Symantec flag comes from any host under the domain.
        assert!(base.domain_has_symantec_cert);
    }

    #[test]
    fn test_exclusion_membership_sets_ocsp_flag_at_any_level() {
        let exclusions: OcspExclusions =
            vec!["ocsp.parent.gov".to_string()].into_iter().collect();

        let records = materialize(
            snapshot(
                vec![
                    domain("parent.gov", "parent.gov", true),
                    domain("ocsp.parent.gov", "parent.gov", false),
                ],
                vec![],
            ),
            &exclusions,
        );

        let base = &records.base_domains[0];
        assert!(!base.ocsp_domain);
        assert!(base.subdomains[0].ocsp_domain);
    }

    #[test]
    fn test_snapshot_supplied_weak_crypto_values_are_rederived() {
        let mut tainted = domain("parent.gov", "parent.gov", true);
        tainted.domain_has_weak_crypto = true;
        tainted.domain_has_symantec_cert = true;

        let records = materialize(snapshot(vec![tainted], vec![]), &OcspExclusions::default());

        let base = &records.base_domains[0];
        assert!(!base.domain_has_weak_crypto);
        assert!(!base.domain_has_symantec_cert);
        assert!(base.hosts_with_weak_crypto.is_empty());
    }
}
