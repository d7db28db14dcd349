use crate::model::metrics::{Metric, MetricSet};
use crate::report::{
    BAR_CHAR, CHART_TITLE, LABEL_WIDTH, RULE_WIDTH, bar_length, format_score_2,
};

pub fn render_bar_chart(set: &MetricSet) -> String {
    let rule = rule();
    let mut out = String::new();
    out.push_str(CHART_TITLE);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for metric in set {
        out.push_str(&render_row(metric));
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

pub fn render_row(metric: &Metric) -> String {
    let bar = BAR_CHAR.to_string().repeat(bar_length(metric.score));
    format!(
        "{:<width$}: {} |{}",
        metric.category.name(),
        format_score_2(metric.score),
        bar,
        width = LABEL_WIDTH
    )
}

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
