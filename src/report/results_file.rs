use crate::model::metrics::MetricSet;
use crate::report::{RESULTS_HEADER, format_score_raw};

/// Results file body. Scores keep full precision, unlike the console chart.
pub fn render_results_file(set: &MetricSet) -> String {
    let mut out = String::new();
    out.push_str(RESULTS_HEADER);
    out.push('\n');
    for metric in set {
        out.push_str(&format!(
            "{}: {}\n",
            metric.category.name(),
            format_score_raw(metric.score)
        ));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/results_file.rs"]
mod tests;
