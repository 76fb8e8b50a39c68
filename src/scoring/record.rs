//! Scored output model.
//!
//! `ScoreRecord` is the per-domain verdict produced by the scorer. Verdicts
//! that the upstream report format emits conditionally are `Option<bool>`
//! and skipped during serialization when `None`; verdicts that are always
//! present are plain `bool`.

use serde::Serialize;

/// A host:port under a domain that supports weak crypto, with the supported
/// weak protocols/ciphers joined for display (e.g. `"SSLv3, RC4"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeakCryptoEntry {
    pub hostname: String,
    pub port: u16,
    pub weak_crypto_list_str: String,
}

/// The compliance verdicts for one domain or subdomain.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScoreRecord {
    pub domain: String,
    pub ocsp_domain: bool,
    pub live_bool: bool,
    pub https_full_connection_bool: bool,
    pub https_client_auth_required_bool: bool,
    pub strictly_forces_https_bool: bool,
    pub domain_supports_https_bool: bool,
    pub domain_enforces_https_bool: bool,

    /// Set only in some branches of the bad-chain rule: `Some(true)` when the
    /// chain and hostname are both bad, `None` when the chain is bad but the
    /// verdict is carried by the hostname/expiry verdicts instead, and
    /// `Some(false)` when the chain is fine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https_bad_chain_bool: Option<bool>,
    pub https_bad_hostname_bool: bool,
    pub https_expired_cert_bool: bool,
    pub redirect_bool: bool,
    pub downgrades_https_bool: bool,
    pub hsts_base_domain_preloaded_bool: bool,

    /// `None` when the domain earned HSTS credit without serving the header
    /// (preloaded base domain, or client-auth-required connection).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsts_bool: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsts_preloaded_bool: Option<bool>,
    /// Absent whenever `hsts_preloaded_bool` is `Some(true)`; the preload
    /// verdict supersedes the pending/ready sub-verdicts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsts_preload_pending_bool: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsts_preload_ready_bool: Option<bool>,
    pub domain_uses_strong_hsts_bool: bool,

    pub domain_has_weak_crypto_bool: bool,
    pub hosts_with_weak_crypto: Vec<WeakCryptoEntry>,
    pub domain_has_symantec_cert_bool: bool,
    pub bod_1801_compliance: bool,

    /// Live subdomain verdicts, in input order. Always empty on subdomain
    /// records themselves; recursion stops at one level.
    pub subdomain_scores: Vec<ScoreRecord>,
}
