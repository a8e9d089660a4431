use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Scoring error: {0}")]
    Scoring(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Submission rejected: {0}")]
    Submission(#[from] SubmissionError),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

/// Reasons a draft post, comment or reply is turned away before it reaches
/// the analysis or review step.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("please enter a URL to analyze")]
    MissingUrl,

    #[error("please provide both a title and content for your post")]
    MissingContent,

    #[error("you can only select up to {limit} tags")]
    TagLimitReached { limit: usize },

    #[error("please analyze your content before submitting")]
    AnalysisRequired,

    #[error("comment text cannot be empty")]
    EmptyComment,
}

pub type Result<T> = std::result::Result<T, Error>;
