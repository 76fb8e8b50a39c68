//! OCSP/CRL exclusion list.
//!
//! Domains whose sole purpose is OCSP or CRL distribution cannot enforce
//! HTTPS and are excluded from compliance totals. The list arrives as a CSV
//! whose first column is the domain name.

use std::collections::HashSet;
use std::path::Path;

use csv::ReaderBuilder;
use log::info;

use crate::error_handling::ReportError;

/// The set of OCSP/CRL-excluded domains.
#[derive(Debug, Clone, Default)]
pub struct OcspExclusions(HashSet<String>);

impl OcspExclusions {
    pub fn contains(&self, domain: &str) -> bool {
        self.0.contains(domain)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for OcspExclusions {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        OcspExclusions(iter.into_iter().collect())
    }
}

/// Loads the exclusion set from a headerless one-column CSV. Extra columns
/// are tolerated and ignored; blank first columns are skipped.
pub fn load_ocsp_exclusions(path: &Path) -> Result<OcspExclusions, ReportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut domains = HashSet::new();
    for result in reader.records() {
        let record = result?;
        if let Some(domain) = record.get(0) {
            let domain = domain.trim();
            if !domain.is_empty() {
                domains.insert(domain.to_string());
            }
        }
    }

    info!(
        "Loaded {} OCSP/CRL excluded domain(s) from {}",
        domains.len(),
        path.display()
    );
    Ok(OcspExclusions(domains))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loads_first_column_and_skips_blanks() {
        let mut file = tempfile::NamedTempFile::new().expect("should create temp file");
        writeln!(file, "ocsp.example.gov").unwrap();
        writeln!(file, "crl.example.gov,some note").unwrap();
        writeln!(file, "  ").unwrap();
        file.flush().unwrap();

        let exclusions = load_ocsp_exclusions(file.path()).expect("should load");

        assert_eq!(exclusions.len(), 2);
        assert!(exclusions.contains("ocsp.example.gov"));
        assert!(exclusions.contains("crl.example.gov"));
        assert!(!exclusions.contains("example.gov"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_ocsp_exclusions(Path::new("/nonexistent/ocsp-crl.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_iterator() {
        let exclusions: OcspExclusions =
            vec!["a.gov".to_string(), "b.gov".to_string()].into_iter().collect();
        assert_eq!(exclusions.len(), 2);
        assert!(!exclusions.is_empty());
    }
}
