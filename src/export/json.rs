//! JSON report document export.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::export::types::ReportDocument;

/// Writes the report document as pretty-printed JSON.
pub fn export_report_json(document: &ReportDocument, output: &Path) -> Result<()> {
    let file = File::create(output).context(format!(
        "Failed to create report file: {}",
        output.display()
    ))?;
    serde_json::to_writer_pretty(BufWriter::new(file), document)
        .context("Failed to serialize report document")?;
    Ok(())
}
