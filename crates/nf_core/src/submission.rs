//! Validation rules for user-submitted posts.
//!
//! A draft goes through two gates: it must be complete enough to analyze,
//! and it must carry an analysis before it can be submitted for review.
//! Nothing here stores the post.

use serde::{Deserialize, Serialize};

use crate::error::SubmissionError;
use crate::scoring::{AnalysisReport, ScoringInput};

/// Most tags a single post may carry.
pub const MAX_TAGS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DraftKind {
    Url { url: String },
    Text { title: String, content: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionDraft {
    #[serde(flatten)]
    pub kind: DraftKind,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl SubmissionDraft {
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            kind: DraftKind::Url { url: url.into() },
            tags: Vec::new(),
            image_url: None,
        }
    }

    pub fn text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: DraftKind::Text {
                title: title.into(),
                content: content.into(),
            },
            tags: Vec::new(),
            image_url: None,
        }
    }

    /// Deselects a selected tag, or selects it while fewer than [`MAX_TAGS`] are chosen.
    pub fn toggle_tag(&mut self, tag: &str) -> Result<(), SubmissionError> {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
            return Ok(());
        }
        if self.tags.len() >= MAX_TAGS {
            return Err(SubmissionError::TagLimitReached { limit: MAX_TAGS });
        }
        self.tags.push(tag.to_string());
        Ok(())
    }

    pub fn validate_for_analysis(&self) -> Result<(), SubmissionError> {
        match &self.kind {
            DraftKind::Url { url } if url.trim().is_empty() => Err(SubmissionError::MissingUrl),
            DraftKind::Text { title, content }
                if title.trim().is_empty() || content.trim().is_empty() =>
            {
                Err(SubmissionError::MissingContent)
            }
            _ if self.tags.len() > MAX_TAGS => {
                Err(SubmissionError::TagLimitReached { limit: MAX_TAGS })
            }
            _ => Ok(()),
        }
    }

    pub fn validate_for_submit(
        &self,
        analysis: Option<&AnalysisReport>,
    ) -> Result<(), SubmissionError> {
        if analysis.is_none() {
            return Err(SubmissionError::AnalysisRequired);
        }
        self.validate_for_analysis()
    }

    pub fn scoring_input(&self) -> ScoringInput {
        match &self.kind {
            DraftKind::Url { url } => ScoringInput::url(url.trim()),
            DraftKind::Text { title, content } => ScoringInput::text(title.trim(), content.trim()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Review;
    use crate::types::Metrics;

    fn report() -> AnalysisReport {
        AnalysisReport::from_review(
            "fixed",
            Review {
                metrics: Metrics::new(0.8, 0.1, 0.5, 0.05),
                status: None,
                feedback: vec![],
            },
        )
    }

    #[test]
    fn test_tag_limit() {
        let mut draft = SubmissionDraft::url("https://example.com/a");
        draft.toggle_tag("Politics").unwrap();
        draft.toggle_tag("Science").unwrap();
        draft.toggle_tag("Health").unwrap();
        assert_eq!(
            draft.toggle_tag("World"),
            Err(SubmissionError::TagLimitReached { limit: 3 })
        );
        assert_eq!(draft.tags.len(), 3);

        // Deselecting always works, even at the limit.
        draft.toggle_tag("Science").unwrap();
        assert_eq!(draft.tags, vec!["Politics", "Health"]);
        draft.toggle_tag("World").unwrap();
        assert_eq!(draft.tags.len(), 3);
    }

    #[test]
    fn test_url_draft_requires_url() {
        assert_eq!(
            SubmissionDraft::url("  ").validate_for_analysis(),
            Err(SubmissionError::MissingUrl)
        );
        assert!(SubmissionDraft::url("https://example.com").validate_for_analysis().is_ok());
    }

    #[test]
    fn test_text_draft_requires_title_and_content() {
        assert_eq!(
            SubmissionDraft::text("Title", "").validate_for_analysis(),
            Err(SubmissionError::MissingContent)
        );
        assert_eq!(
            SubmissionDraft::text("", "Body").validate_for_analysis(),
            Err(SubmissionError::MissingContent)
        );
        assert!(SubmissionDraft::text("Title", "Body").validate_for_analysis().is_ok());
    }

    #[test]
    fn test_submit_requires_analysis() {
        let draft = SubmissionDraft::text("Title", "Body");
        assert_eq!(draft.validate_for_submit(None), Err(SubmissionError::AnalysisRequired));
        assert!(draft.validate_for_submit(Some(&report())).is_ok());

        let empty = SubmissionDraft::text("", "");
        assert_eq!(
            empty.validate_for_submit(Some(&report())),
            Err(SubmissionError::MissingContent)
        );
    }

    #[test]
    fn test_deserialized_draft_over_tag_limit_is_rejected() {
        let json = r#"{"type":"url","url":"https://example.com","tags":["A","B","C","D"]}"#;
        let draft: SubmissionDraft = serde_json::from_str(json).unwrap();
        assert_eq!(
            draft.validate_for_analysis(),
            Err(SubmissionError::TagLimitReached { limit: 3 })
        );
    }

    #[test]
    fn test_scoring_input_from_draft() {
        let input = SubmissionDraft::text(" Title ", " Body ").scoring_input();
        assert_eq!(input.title.as_deref(), Some("Title"));
        assert_eq!(input.content, "Body");
        assert!(input.url.is_none());

        let input = SubmissionDraft::url("https://example.com").scoring_input();
        assert_eq!(input.url.as_deref(), Some("https://example.com"));
    }
}
