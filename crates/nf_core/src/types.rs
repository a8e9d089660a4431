use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub source: String,
    pub url: String,
    pub author: Author,
    /// RFC 3339 timestamp as supplied by the catalog. Parsed on demand.
    pub created_at: String,
    pub votes: i64,
    #[serde(default)]
    pub comment_count: u32,
    pub tags: Vec<String>,
    #[serde(default)]
    pub ai_verification: Option<AiVerification>,
    #[serde(default)]
    pub analysis: Option<ArticleAnalysis>,
}

impl Article {
    /// The creation instant, or `None` when the stored timestamp does not parse.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Verification score used for ranking; articles without one count as 0.
    pub fn verification_score(&self) -> f64 {
        self.ai_verification.as_ref().map_or(0.0, |v| v.score)
    }

    pub fn verification_status(&self) -> VerificationStatus {
        self.ai_verification
            .as_ref()
            .map_or(VerificationStatus::Unverified, |v| v.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Badge-level verification attached to a feed card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiVerification {
    pub status: VerificationStatus,
    pub score: f64,
}

/// Full analysis shown on the article detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleAnalysis {
    pub status: VerificationStatus,
    pub metrics: Metrics,
    #[serde(default)]
    pub feedback: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Verified,
    Warning,
    Unreliable,
    #[default]
    Unverified,
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Verified => "verified",
            Self::Warning => "warning",
            Self::Unreliable => "unreliable",
            Self::Unverified => "unverified",
        };
        f.write_str(s)
    }
}

/// The four content signals a scoring provider produces, each nominally in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub credibility: f64,
    pub bias: f64,
    pub sentiment: f64,
    pub toxicity: f64,
}

impl Metrics {
    /// Builds a metrics value with every field clamped into [0, 1].
    pub fn new(credibility: f64, bias: f64, sentiment: f64, toxicity: f64) -> Self {
        Self {
            credibility,
            bias,
            sentiment,
            toxicity,
        }
        .clamped()
    }

    /// Copy with out-of-range values clamped into [0, 1] and NaN mapped to 0.
    pub fn clamped(self) -> Self {
        Self {
            credibility: clamp_unit(self.credibility),
            bias: clamp_unit(self.bias),
            sentiment: clamp_unit(self.sentiment),
            toxicity: clamp_unit(self.toxicity),
        }
    }
}

pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub author: Author,
    pub created_at: String,
    pub votes: i64,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub bio: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub join_date: String,
    pub reputation: u32,
    pub posts: u32,
    pub followers: u32,
    pub following: u32,
    #[serde(default)]
    pub badges: Vec<Badge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub icon: String,
}
