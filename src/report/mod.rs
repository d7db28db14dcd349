pub mod json;
pub mod results_file;
pub mod text;

pub const CHART_TITLE: &str = "Optimization Test Results:";
pub const RESULTS_HEADER: &str = "Detailed Test Metrics (Text Plot)";
pub const RULE_WIDTH: usize = 30;
pub const LABEL_WIDTH: usize = 15;
pub const BAR_SCALE: f64 = 20.0;
pub const BAR_CHAR: char = '#';

/// Number of bar characters for `score`: `floor(score * BAR_SCALE)`.
pub fn bar_length(score: f64) -> usize {
    let scaled = (score * BAR_SCALE).floor();
    if scaled <= 0.0 { 0 } else { scaled as usize }
}

pub fn format_score_2(v: f64) -> String {
    format!("{:.2}", v)
}

/// Shortest round-trip form, always with a decimal point (`1.0`, not `1`).
pub fn format_score_raw(v: f64) -> String {
    format!("{:?}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
