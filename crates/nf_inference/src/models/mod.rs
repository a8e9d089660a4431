use nf_core::{Error, Metrics, Result, ScoringProvider};
use std::sync::Arc;
use tracing::info;

use crate::Config;

pub mod fixed;
pub mod heuristic;
pub mod random;

pub use fixed::FixedScorer;
pub use heuristic::HeuristicScorer;
pub use random::RandomScorer;

/// Names accepted by [`create_scorer`].
pub const SCORERS: [&str; 3] = ["random", "heuristic", "fixed"];

pub fn create_scorer(config: &Config) -> Result<Arc<dyn ScoringProvider>> {
    let scorer: Arc<dyn ScoringProvider> = match config.scorer.to_lowercase().as_str() {
        "random" => Arc::new(match config.seed {
            Some(seed) => RandomScorer::seeded(seed),
            None => RandomScorer::new(),
        }),
        "heuristic" => Arc::new(HeuristicScorer::new()),
        "fixed" => Arc::new(FixedScorer::new(
            config.fixed_metrics.unwrap_or_else(|| Metrics::new(0.5, 0.5, 0.5, 0.5)),
        )),
        other => {
            return Err(Error::Scoring(format!(
                "Unknown scorer: {} (available: {})",
                other,
                SCORERS.join(", ")
            )))
        }
    };
    info!("🧠 Scoring provider ready (using {})", scorer.name());
    Ok(scorer)
}
