use serde::Serialize;

pub const SCORE_MIN: f64 = 0.7;
pub const SCORE_MAX: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Accuracy,
    Fairness,
    Robustness,
    Explainability,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Accuracy => "Accuracy",
            Category::Fairness => "Fairness",
            Category::Robustness => "Robustness",
            Category::Explainability => "Explainability",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub fn category_order() -> &'static [Category; 4] {
    &[
        Category::Accuracy,
        Category::Fairness,
        Category::Robustness,
        Category::Explainability,
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metric {
    pub category: Category,
    pub score: f64,
}

/// One run's metrics, always four entries in `category_order()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MetricSet {
    metrics: [Metric; 4],
}

impl MetricSet {
    /// Pairs `scores` with the fixed categories, position by position.
    pub fn from_scores(scores: [f64; 4]) -> Self {
        let order = category_order();
        let metrics = std::array::from_fn(|i| Metric {
            category: order[i],
            score: scores[i],
        });
        Self { metrics }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Metric> {
        self.metrics.iter()
    }

    pub fn scores(&self) -> [f64; 4] {
        self.metrics.map(|m| m.score)
    }
}

impl<'a> IntoIterator for &'a MetricSet {
    type Item = &'a Metric;
    type IntoIter = std::slice::Iter<'a, Metric>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/metrics.rs"]
mod tests;
