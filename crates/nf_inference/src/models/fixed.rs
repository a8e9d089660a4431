use async_trait::async_trait;
use nf_core::{Metrics, Result, Review, ScoringInput, ScoringProvider, VerificationStatus};

/// Returns the same review for every input.
#[derive(Debug, Clone)]
pub struct FixedScorer {
    metrics: Metrics,
    status: Option<VerificationStatus>,
    feedback: Vec<String>,
}

impl FixedScorer {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            metrics: metrics.clamped(),
            status: None,
            feedback: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: VerificationStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_feedback<I, S>(mut self, feedback: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feedback = feedback.into_iter().map(Into::into).collect();
        self
    }
}

#[async_trait]
impl ScoringProvider for FixedScorer {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn score(&self, _input: &ScoringInput) -> Result<Metrics> {
        Ok(self.metrics)
    }

    async fn review(&self, _input: &ScoringInput) -> Result<Review> {
        Ok(Review {
            metrics: self.metrics,
            status: self.status,
            feedback: self.feedback.clone(),
        })
    }
}
