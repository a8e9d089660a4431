use nf_core::Metrics;

pub mod analysis;
pub mod models;

#[derive(Debug, Clone)]
pub struct Config {
    /// Which provider to build: `random`, `heuristic` or `fixed`
    pub scorer: String,
    /// Metrics returned by the `fixed` provider
    pub fixed_metrics: Option<Metrics>,
    /// Seed for the `random` provider; entropy when unset
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scorer: "random".to_string(),
            fixed_metrics: None,
            seed: None,
        }
    }
}

impl Config {
    pub fn new(scorer: impl Into<String>) -> Self {
        Self {
            scorer: scorer.into(),
            ..Self::default()
        }
    }
}

pub mod prelude {
    pub use super::analysis::ContentAnalyzer;
    pub use super::models::create_scorer;
    pub use super::Config;
    pub use nf_core::{AnalysisReport, Error, Metrics, Result, ScoringInput, ScoringProvider};
}

pub use analysis::ContentAnalyzer;
pub use models::create_scorer;
