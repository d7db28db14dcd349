use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::metrics::{MetricSet, SCORE_MAX, SCORE_MIN};

/// Supplies one score per call, drawn from `[SCORE_MIN, SCORE_MAX]`.
pub trait ScoreSource {
    fn next_score(&mut self) -> f64;
}

/// Uniform sampling over the score range from any `rand` generator.
#[derive(Debug)]
pub struct RngScoreSource<R> {
    rng: R,
}

impl<R: Rng> RngScoreSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngScoreSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> ScoreSource for RngScoreSource<R> {
    fn next_score(&mut self) -> f64 {
        self.rng.gen_range(SCORE_MIN..=SCORE_MAX)
    }
}

/// Returns the same score on every call.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedScore(pub f64);

#[cfg(test)]
impl ScoreSource for FixedScore {
    fn next_score(&mut self) -> f64 {
        self.0
    }
}

pub fn run_stage1(source: &mut dyn ScoreSource) -> MetricSet {
    let mut scores = [0.0f64; 4];
    for score in scores.iter_mut() {
        *score = source.next_score();
    }
    MetricSet::from_scores(scores)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_generate.rs"]
mod tests;
