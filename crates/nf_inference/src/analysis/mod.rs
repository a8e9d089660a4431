use nf_core::{AnalysisReport, Result, ScoringInput, ScoringProvider, SubmissionDraft};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Runs content through a scoring provider and the trust classifier.
pub struct ContentAnalyzer {
    provider: Arc<dyn ScoringProvider>,
}

impl fmt::Debug for ContentAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentAnalyzer")
            .field("provider", &self.provider.name())
            .finish()
    }
}

impl ContentAnalyzer {
    pub fn new(provider: Arc<dyn ScoringProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &Arc<dyn ScoringProvider> {
        &self.provider
    }

    pub async fn analyze(&self, input: &ScoringInput) -> Result<AnalysisReport> {
        let review = self.provider.review(input).await?;
        let report = AnalysisReport::from_review(self.provider.name(), review);
        info!(
            "🔎 Analysis complete: {} ({}% trust, via {})",
            report.status, report.trust_percent, report.provider
        );
        Ok(report)
    }

    /// Validates a draft for analysis, then analyzes it.
    pub async fn analyze_draft(&self, draft: &SubmissionDraft) -> Result<AnalysisReport> {
        draft.validate_for_analysis()?;
        self.analyze(&draft.scoring_input()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FixedScorer;
    use nf_core::{Error, Metrics, SubmissionError, Tier, VerificationStatus};

    fn analyzer(status: Option<VerificationStatus>) -> ContentAnalyzer {
        let mut scorer = FixedScorer::new(Metrics::new(0.5, 0.1, 0.5, 0.02))
            .with_feedback(["Claims are supported by quantitative data."]);
        if let Some(status) = status {
            scorer = scorer.with_status(status);
        }
        ContentAnalyzer::new(Arc::new(scorer))
    }

    #[tokio::test]
    async fn test_analyze_derives_status_when_provider_gives_none() {
        let report = analyzer(None)
            .analyze(&ScoringInput::text("Title", "Body"))
            .await
            .unwrap();
        assert_eq!(report.status, VerificationStatus::Warning);
        assert_eq!(report.headline, "Exercise Caution");
        assert_eq!(report.trust_percent, 50);
        assert_eq!(report.provider, "fixed");
        assert_eq!(report.assessment.classification.bias, Tier::Good);
        assert_eq!(report.feedback.len(), 1);
    }

    #[tokio::test]
    async fn test_provider_status_is_not_overridden() {
        let report = analyzer(Some(VerificationStatus::Verified))
            .analyze(&ScoringInput::text("Title", "Body"))
            .await
            .unwrap();
        assert_eq!(report.status, VerificationStatus::Verified);
        assert_eq!(report.assessment.classification.status, VerificationStatus::Warning);
    }

    #[tokio::test]
    async fn test_analyze_draft_validates_first() {
        let err = analyzer(None)
            .analyze_draft(&SubmissionDraft::url(""))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Submission(SubmissionError::MissingUrl)));

        let report = analyzer(None)
            .analyze_draft(&SubmissionDraft::url("https://example.com"))
            .await
            .unwrap();
        assert_eq!(report.trust_percent, 50);
    }
}
