use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    fn delta(&self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

/// Per-viewer vote state for an article or comment.
///
/// This is view state: it starts from the catalog's count and is never
/// written back to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteState {
    pub count: i64,
    #[serde(default)]
    pub user_vote: Option<VoteDirection>,
}

impl VoteState {
    pub fn new(count: i64) -> Self {
        Self {
            count,
            user_vote: None,
        }
    }

    /// Applies a click on the up or down arrow.
    ///
    /// Clicking the active direction again withdraws the vote, clicking the
    /// opposite one flips it (a swing of two). The count saturates at the
    /// `i64` bounds.
    pub fn toggle(self, direction: VoteDirection) -> Self {
        match self.user_vote {
            Some(current) if current == direction => Self {
                count: self.count.saturating_sub(direction.delta()),
                user_vote: None,
            },
            None => Self {
                count: self.count.saturating_add(direction.delta()),
                user_vote: Some(direction),
            },
            Some(_) => Self {
                count: self.count.saturating_add(2 * direction.delta()),
                user_vote: Some(direction),
            },
        }
    }
}
