pub mod comments;
pub mod error;
pub mod feed;
pub mod scoring;
pub mod storage;
pub mod submission;
pub mod trust;
pub mod types;
pub mod votes;

pub use error::{Error, SubmissionError};
pub use feed::{select, select_with_now, FilterConfig, SortKey, TimeWindow, ALL_TAGS};
pub use scoring::{AnalysisReport, Review, ScoringInput, ScoringProvider};
pub use storage::ArticleCatalog;
pub use submission::{DraftKind, SubmissionDraft, MAX_TAGS};
pub use trust::{
    classify, format_percent, readouts, status_for_score, Assessment, CardBadge, Classification,
    MetricReadout, Rating, Sentiment, Tier,
};
pub use types::{
    AiVerification, Article, ArticleAnalysis, Author, Badge, Comment, Metrics, UserProfile,
    VerificationStatus,
};
pub use votes::{VoteDirection, VoteState};

pub type Result<T> = std::result::Result<T, Error>;
