use serde::Serialize;

use crate::model::metrics::{Category, MetricSet};
use crate::report::bar_length;

#[derive(Debug, Clone, Serialize)]
pub struct SummaryEntry {
    pub category: Category,
    pub score: f64,
    pub bar_length: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: &'static str,
    pub version: &'static str,
    pub seed: Option<u64>,
    pub results_path: String,
    pub metrics: Vec<SummaryEntry>,
}

impl SummaryData {
    pub fn new(set: &MetricSet, seed: Option<u64>, results_path: String) -> Self {
        let metrics = set
            .iter()
            .map(|m| SummaryEntry {
                category: m.category,
                score: m.score,
                bar_length: bar_length(m.score),
            })
            .collect();
        Self {
            tool: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            seed,
            results_path,
            metrics,
        }
    }
}

pub fn render_summary_json(data: &SummaryData) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(data)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
