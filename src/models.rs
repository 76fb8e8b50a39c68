//! Input data models.
//!
//! These types describe the fully materialized scan data the engine consumes:
//! one `ScanRecord` per domain or subdomain, per-host TLS scan rows, and the
//! organization snapshot that bundles them together.

use serde::{Deserialize, Serialize};

/// One raw HTTPS/HSTS scan record for a domain or subdomain.
///
/// Records arrive pre-collected from an upstream scanner; this engine only
/// classifies and tallies them. `hsts_max_age` of zero or a negative value
/// means the header carried no usable max-age.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanRecord {
    pub domain: String,
    pub base_domain: String,
    pub is_base_domain: bool,
    pub live: bool,
    pub https_full_connection: bool,
    pub https_client_auth_required: bool,
    pub strictly_forces_https: bool,
    pub domain_supports_https: bool,
    pub domain_enforces_https: bool,
    pub https_bad_chain: bool,
    pub https_bad_hostname: bool,
    pub https_expired_cert: bool,
    pub redirect: bool,
    pub downgrades_https: bool,
    pub hsts_base_domain_preloaded: bool,
    pub hsts: bool,
    pub hsts_preloaded: bool,
    pub hsts_preload_pending: bool,
    pub hsts_preload_ready: bool,
    pub domain_uses_strong_hsts: bool,
    pub hsts_max_age: i64,

    /// Derived from `host_scans` during ingest; true if any host under this
    /// domain supports SSLv2, SSLv3, 3DES, or RC4.
    #[serde(default)]
    pub domain_has_weak_crypto: bool,
    /// The subset of this domain's host scan rows that carry weak crypto.
    #[serde(default)]
    pub hosts_with_weak_crypto: Vec<HostScanRecord>,
    #[serde(default)]
    pub domain_has_symantec_cert: bool,
    /// True if the domain is in the OCSP/CRL exclusion set. Excluded domains
    /// are scored for display but never counted toward compliance totals.
    #[serde(default)]
    pub ocsp_domain: bool,
    /// Populated on base domains only, ordered by domain name.
    #[serde(default)]
    pub subdomains: Vec<ScanRecord>,
}

/// One TLS scan row for a single host:port under a domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostScanRecord {
    pub domain: String,
    pub scanned_hostname: String,
    pub scanned_port: u16,
    pub sslv2: bool,
    pub sslv3: bool,
    pub any_3des: bool,
    pub any_rc4: bool,
    #[serde(default)]
    pub is_symantec_cert: bool,
}

impl HostScanRecord {
    /// True if the host supports at least one weak protocol or cipher.
    pub fn has_weak_crypto(&self) -> bool {
        self.sslv2 || self.sslv3 || self.any_3des || self.any_rc4
    }

    /// Names of the weak protocols/ciphers this host supports.
    pub fn weak_crypto_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.sslv2 {
            names.push("SSLv2");
        }
        if self.sslv3 {
            names.push("SSLv3");
        }
        if self.any_3des {
            names.push("3DES");
        }
        if self.any_rc4 {
            names.push("RC4");
        }
        names
    }
}

/// The raw record set for one organization, as produced by the data-retrieval
/// collaborator: a flat list of domain records (base domains and subdomains
/// mixed) plus the per-host TLS scan rows used to derive weak-crypto flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationSnapshot {
    pub organization: String,
    #[serde(default)]
    pub organization_id: Option<String>,
    pub domains: Vec<ScanRecord>,
    #[serde(default)]
    pub host_scans: Vec<HostScanRecord>,
}
