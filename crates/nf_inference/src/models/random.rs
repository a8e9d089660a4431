use async_trait::async_trait;
use nf_core::{Error, Metrics, Result, Review, ScoringInput, ScoringProvider, VerificationStatus};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::Mutex;

const FEEDBACK: [&str; 3] = [
    "Consider adding additional sources to strengthen credibility.",
    "Some statements may benefit from more specific data points.",
    "Overall balanced perspective, minimal bias detected.",
];

/// Mock provider that ignores the content and draws plausible scores.
///
/// Credibility lands in [0.6, 0.9), bias in [0, 0.4), sentiment in
/// [0.3, 0.7) and toxicity in [0, 0.2). The review status is `verified`
/// seven times out of ten and `warning` otherwise.
pub struct RandomScorer {
    rng: Mutex<StdRng>,
}

impl fmt::Debug for RandomScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomScorer").finish()
    }
}

impl Default for RandomScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomScorer {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn draw<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| Error::Scoring(format!("Random scorer lock poisoned: {}", e)))?;
        Ok(f(&mut rng))
    }
}

#[async_trait]
impl ScoringProvider for RandomScorer {
    fn name(&self) -> &str {
        "random"
    }

    async fn score(&self, _input: &ScoringInput) -> Result<Metrics> {
        self.draw(|rng| {
            Metrics::new(
                rng.gen_range(0.6..0.9),
                rng.gen_range(0.0..0.4),
                rng.gen_range(0.3..0.7),
                rng.gen_range(0.0..0.2),
            )
        })
    }

    async fn review(&self, input: &ScoringInput) -> Result<Review> {
        let metrics = self.score(input).await?;
        let status = if self.draw(|rng| rng.gen_bool(0.7))? {
            VerificationStatus::Verified
        } else {
            VerificationStatus::Warning
        };
        Ok(Review {
            metrics,
            status: Some(status),
            feedback: FEEDBACK.iter().map(|s| s.to_string()).collect(),
        })
    }
}
