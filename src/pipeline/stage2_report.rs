use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ReportError;
use crate::model::metrics::MetricSet;
use crate::report::json::{SummaryData, render_summary_json};
use crate::report::results_file::render_results_file;

/// Truncates or creates `path`. The parent directory must already exist.
pub fn write_results_file(set: &MetricSet, path: &Path) -> Result<(), ReportError> {
    write_text(path, &render_results_file(set))
}

pub fn write_summary_json(
    set: &MetricSet,
    seed: Option<u64>,
    results_path: &Path,
    path: &Path,
) -> Result<(), ReportError> {
    let data = SummaryData::new(set, seed, results_path.display().to_string());
    let json = render_summary_json(&data)?;
    write_text(path, &json)
}

fn write_text(path: &Path, contents: &str) -> Result<(), ReportError> {
    let file = File::create(path).map_err(|e| ReportError::io(path, e))?;
    let mut w = BufWriter::new(file);
    w.write_all(contents.as_bytes())
        .and_then(|_| w.flush())
        .map_err(|e| ReportError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_report.rs"]
mod tests;
