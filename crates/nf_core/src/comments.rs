use crate::error::SubmissionError;
use crate::types::Comment;

impl Comment {
    /// This comment plus every nested reply.
    pub fn thread_size(&self) -> usize {
        1 + self.replies.iter().map(Comment::thread_size).sum::<usize>()
    }
}

pub fn total_comments(comments: &[Comment]) -> usize {
    comments.iter().map(Comment::thread_size).sum()
}

/// Checks a new comment or reply body. Returns the trimmed text.
pub fn validate_reply(text: &str) -> Result<&str, SubmissionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SubmissionError::EmptyComment);
    }
    Ok(trimmed)
}
