use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::trust::Assessment;
use crate::types::{Metrics, VerificationStatus};
use crate::Result;

/// Text handed to a scoring provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl ScoringInput {
    pub fn text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: content.into(),
            url: None,
        }
    }

    pub fn url(url: impl Into<String>) -> Self {
        Self {
            title: None,
            content: String::new(),
            url: Some(url.into()),
        }
    }
}

/// What a provider says about a piece of content beyond the raw metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub metrics: Metrics,
    pub status: Option<VerificationStatus>,
    pub feedback: Vec<String>,
}

#[async_trait]
pub trait ScoringProvider: Send + Sync + fmt::Debug {
    /// Short name used in logs and CLI flags
    fn name(&self) -> &str;

    /// Produce the four content metrics for the input
    async fn score(&self, input: &ScoringInput) -> Result<Metrics>;

    /// Metrics plus an optional provider-chosen status and feedback notes
    async fn review(&self, input: &ScoringInput) -> Result<Review> {
        let metrics = self.score(input).await?;
        Ok(Review {
            metrics,
            status: None,
            feedback: Vec::new(),
        })
    }
}

/// Result of running content through a provider and the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub provider: String,
    pub status: VerificationStatus,
    pub headline: String,
    pub trust_percent: i64,
    pub assessment: Assessment,
    pub feedback: Vec<String>,
}

impl AnalysisReport {
    pub fn from_review(provider: &str, review: Review) -> Self {
        let assessment = Assessment::new(review.metrics, review.status);
        let status = assessment.display_status();
        Self {
            provider: provider.to_string(),
            status,
            headline: status.headline().to_string(),
            trust_percent: crate::trust::format_percent(assessment.metrics.credibility),
            assessment,
            feedback: review.feedback,
        }
    }
}
