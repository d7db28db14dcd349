pub mod stage1_generate;
pub mod stage2_report;

use std::io::Write;
use std::path::PathBuf;

use crate::error::ReportError;
use crate::model::metrics::MetricSet;
use crate::report::text::render_bar_chart;
use stage1_generate::{ScoreSource, run_stage1};
use stage2_report::{write_results_file, write_summary_json};

pub const DEFAULT_RESULTS_PATH: &str = "tests/results/test_results_detailed.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub results_path: PathBuf,
    pub seed: Option<u64>,
    pub summary_json: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            results_path: PathBuf::from(DEFAULT_RESULTS_PATH),
            seed: None,
            summary_json: None,
        }
    }
}

/// Runs generate, chart, persist and confirm once, in that order.
///
/// The chart reaches `console` before the results file is opened, so a
/// failed write still leaves the chart behind.
pub struct Reporter<S> {
    config: RunConfig,
    source: S,
}

impl<S: ScoreSource> Reporter<S> {
    pub fn new(config: RunConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn run<W: Write>(&mut self, console: &mut W) -> Result<MetricSet, ReportError> {
        let set = run_stage1(&mut self.source);
        tracing::debug!(scores = ?set.scores(), "generated metric set");

        console
            .write_all(render_bar_chart(&set).as_bytes())
            .map_err(ReportError::Console)?;

        let results_path = &self.config.results_path;
        write_results_file(&set, results_path)?;
        tracing::info!(path = %results_path.display(), "results file written");

        if let Some(summary_path) = &self.config.summary_json {
            write_summary_json(&set, self.config.seed, results_path, summary_path)?;
            tracing::info!(path = %summary_path.display(), "summary written");
        }

        writeln!(
            console,
            "Generated text-based results in {}",
            results_path.display()
        )
        .and_then(|_| console.flush())
        .map_err(ReportError::Console)?;

        Ok(set)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
