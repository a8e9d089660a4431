//! Trust classification: status and per-metric tiers from the four content metrics.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{clamp_unit, Article, Metrics, VerificationStatus};

/// Lower bound of the top bucket, inclusive.
pub const HIGH_THRESHOLD: f64 = 0.7;
/// Lower bound of the middle bucket, inclusive.
pub const MEDIUM_THRESHOLD: f64 = 0.4;

const POSITIVE_SENTIMENT: f64 = 0.6;
const NEGATIVE_SENTIMENT: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Good,
    Medium,
    Poor,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Good => "Good",
            Self::Medium => "Medium",
            Self::Poor => "Poor",
        };
        f.write_str(s)
    }
}

/// Sentiment has no good/bad polarity, so it gets its own buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Derived from credibility alone; never `Unverified`.
    pub status: VerificationStatus,
    pub credibility: Tier,
    /// Tier of the inverted bias value (neutrality).
    pub bias: Tier,
    pub sentiment: Sentiment,
    /// Tier of the inverted toxicity value (safety).
    pub toxicity: Tier,
}

pub fn tier(value: f64) -> Tier {
    if value >= HIGH_THRESHOLD {
        Tier::Good
    } else if value >= MEDIUM_THRESHOLD {
        Tier::Medium
    } else {
        Tier::Poor
    }
}

pub fn sentiment(value: f64) -> Sentiment {
    if value > POSITIVE_SENTIMENT {
        Sentiment::Positive
    } else if value < NEGATIVE_SENTIMENT {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Coarse three-bucket status for a credibility score.
pub fn status_for_score(credibility: f64) -> VerificationStatus {
    match tier(clamp_unit(credibility)) {
        Tier::Good => VerificationStatus::Verified,
        Tier::Medium => VerificationStatus::Warning,
        Tier::Poor => VerificationStatus::Unreliable,
    }
}

/// Classifies each metric independently. Inputs are clamped into [0, 1]
/// first; bias and toxicity are "better when low" and get inverted before
/// thresholding.
pub fn classify(metrics: &Metrics) -> Classification {
    let m = metrics.clamped();
    Classification {
        status: status_for_score(m.credibility),
        credibility: tier(m.credibility),
        bias: tier(1.0 - m.bias),
        sentiment: sentiment(m.sentiment),
        toxicity: tier(1.0 - m.toxicity),
    }
}

/// Integer percentage for display. Rounds half away from zero, so
/// `format_percent(0.895) == 90`.
pub fn format_percent(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

impl VerificationStatus {
    /// Heading used by the analysis panel.
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Verified => "Verified Content",
            Self::Warning => "Exercise Caution",
            Self::Unreliable => "Potentially Misleading",
            Self::Unverified => "Unverified Content",
        }
    }

    /// Short label used by feed card badges.
    pub fn badge_label(&self) -> &'static str {
        match self {
            Self::Verified => "Verified",
            Self::Warning => "Needs Review",
            Self::Unreliable => "Questionable",
            Self::Unverified => "Unverified",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Rating {
    Tier(Tier),
    Sentiment(Sentiment),
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tier(t) => t.fmt(f),
            Self::Sentiment(s) => s.fmt(f),
        }
    }
}

/// One row of the metrics panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricReadout {
    pub label: String,
    pub percent: i64,
    pub rating: Rating,
}

/// The four display rows: credibility as-is, bias shown as neutrality,
/// sentiment as-is and toxicity shown as safety.
pub fn readouts(metrics: &Metrics) -> Vec<MetricReadout> {
    let m = metrics.clamped();
    let c = classify(&m);
    vec![
        MetricReadout {
            label: "Credibility".to_string(),
            percent: format_percent(m.credibility),
            rating: Rating::Tier(c.credibility),
        },
        MetricReadout {
            label: "Neutrality".to_string(),
            percent: format_percent(1.0 - m.bias),
            rating: Rating::Tier(c.bias),
        },
        MetricReadout {
            label: "Sentiment".to_string(),
            percent: format_percent(m.sentiment),
            rating: Rating::Sentiment(c.sentiment),
        },
        MetricReadout {
            label: "Safety".to_string(),
            percent: format_percent(1.0 - m.toxicity),
            rating: Rating::Tier(c.toxicity),
        },
    ]
}

/// A classification next to whatever status the data source supplied.
///
/// The two are never reconciled: a catalog may mark an article `verified`
/// while its credibility lands in the warning bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub metrics: Metrics,
    pub supplied_status: Option<VerificationStatus>,
    pub classification: Classification,
    pub readouts: Vec<MetricReadout>,
}

impl Assessment {
    pub fn new(metrics: Metrics, supplied_status: Option<VerificationStatus>) -> Self {
        let metrics = metrics.clamped();
        Self {
            metrics,
            supplied_status,
            classification: classify(&metrics),
            readouts: readouts(&metrics),
        }
    }

    /// The status to display: the supplied one when present, otherwise the derived one.
    pub fn display_status(&self) -> VerificationStatus {
        self.supplied_status.unwrap_or(self.classification.status)
    }
}

impl Article {
    /// Assessment for the detail page, when the catalog carries full metrics.
    pub fn assessment(&self) -> Option<Assessment> {
        self.analysis
            .as_ref()
            .map(|a| Assessment::new(a.metrics, Some(a.status)))
    }

    /// Badge shown on a feed card.
    pub fn badge(&self) -> CardBadge {
        let status = self.verification_status();
        CardBadge {
            status,
            label: status.badge_label().to_string(),
            percent: self.ai_verification.map(|v| format_percent(clamp_unit(v.score))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardBadge {
    pub status: VerificationStatus,
    pub label: String,
    pub percent: Option<i64>,
}
