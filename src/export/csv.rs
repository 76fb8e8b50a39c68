//! CSV results attachment.
//!
//! Writes one row per domain and subdomain (sorted by domain name) with the
//! raw scan fields and a readable weak-crypto host summary.

use anyhow::{Context, Result};
use csv::Writer;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::models::{HostScanRecord, ScanRecord};

/// Writes the results attachment to `output`, or to stdout when `None`.
///
/// Returns the number of data rows written.
pub fn export_results_csv(
    base_domains: &[ScanRecord],
    output: Option<&PathBuf>,
) -> Result<usize> {
    let mut writer: Writer<Box<dyn Write>> = if let Some(output_path) = output {
        let file = std::fs::File::create(output_path).context(format!(
            "Failed to create output file: {}",
            output_path.display()
        ))?;
        Writer::from_writer(Box::new(file) as Box<dyn Write>)
    } else {
        Writer::from_writer(Box::new(io::stdout()) as Box<dyn Write>)
    };

    writer.write_record([
        "Domain",
        "Base Domain",
        "Domain Is Base Domain",
        "Live",
        "Redirect",
        "Downgrades HTTPS",
        "Strictly Forces HTTPS",
        "HTTPS Full Connection",
        "HTTPS Client Auth Required",
        "HTTPS Bad Chain",
        "HTTPS Bad Hostname",
        "HTTPS Expired Cert",
        "HSTS",
        "HSTS Max Age",
        "HSTS Preload Ready",
        "HSTS Preload Pending",
        "HSTS Preloaded",
        "Base Domain HSTS Preloaded",
        "Domain Supports HTTPS",
        "Domain Enforces HTTPS",
        "Domain Uses Strong HSTS",
        "Domain Supports Weak Crypto",
        "Web Hosts With Weak Crypto",
        "Domain Uses Symantec Certificate",
        "OCSP Domain",
    ])?;

    // Flatten to one sorted list of all domains, base and sub alike.
    let mut all_domains: Vec<&ScanRecord> = Vec::new();
    for base in base_domains {
        all_domains.push(base);
        all_domains.extend(base.subdomains.iter());
    }
    all_domains.sort_by(|a, b| a.domain.cmp(&b.domain));

    let mut record_count = 0;
    for record in all_domains {
        let hosts_with_weak_crypto_str = record
            .hosts_with_weak_crypto
            .iter()
            .map(rehydrate_weak_crypto_host)
            .collect::<Vec<String>>()
            .join(", ");

        writer.write_record(&[
            record.domain.clone(),
            record.base_domain.clone(),
            record.is_base_domain.to_string(),
            record.live.to_string(),
            record.redirect.to_string(),
            record.downgrades_https.to_string(),
            record.strictly_forces_https.to_string(),
            record.https_full_connection.to_string(),
            record.https_client_auth_required.to_string(),
            record.https_bad_chain.to_string(),
            record.https_bad_hostname.to_string(),
            record.https_expired_cert.to_string(),
            record.hsts.to_string(),
            record.hsts_max_age.to_string(),
            record.hsts_preload_ready.to_string(),
            record.hsts_preload_pending.to_string(),
            record.hsts_preloaded.to_string(),
            record.hsts_base_domain_preloaded.to_string(),
            record.domain_supports_https.to_string(),
            record.domain_enforces_https.to_string(),
            record.domain_uses_strong_hsts.to_string(),
            record.domain_has_weak_crypto.to_string(),
            hosts_with_weak_crypto_str,
            record.domain_has_symantec_cert.to_string(),
            record.ocsp_domain.to_string(),
        ])?;
        record_count += 1;
    }

    writer.flush()?;

    Ok(record_count)
}

/// Formats one weak-crypto host row for the attachment, e.g.
/// `"www.example.gov:443 [supports: SSLv3,RC4]"`.
fn rehydrate_weak_crypto_host(host: &HostScanRecord) -> String {
    format!(
        "{}:{} [supports: {}]",
        host.scanned_hostname,
        host.scanned_port,
        host.weak_crypto_names().join(",")
    )
}
