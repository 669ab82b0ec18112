use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::score::ScoreId;
use super::user::UserId;

/// A formal objection attached to a score, raised by a super-reviewer and
/// addressed to the task executor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub score: ScoreId,
    pub creator: UserId,
    /// Defaults to the executor of the score's task.
    pub addressee: UserId,
    pub comment: String,
    pub answer: Option<String>,
    pub opened_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl Claim {
    pub fn new(
        score: ScoreId,
        creator: UserId,
        addressee: UserId,
        comment: impl Into<String>,
        opened_at: DateTime<Utc>,
    ) -> Self {
        Self {
            score,
            creator,
            addressee,
            comment: comment.into(),
            answer: None,
            opened_at,
            closed_at: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.closed_at.is_none()
    }

    pub fn answered(&self) -> bool {
        self.answer
            .as_deref()
            .is_some_and(|answer| !answer.trim().is_empty())
    }
}

/// A request for clarification attached to a score. Same thread shape as a
/// claim but without the deletion workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clarification {
    pub score: ScoreId,
    pub creator: UserId,
    pub comment: String,
    pub answer: Option<String>,
    pub opened_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl Clarification {
    pub fn new(
        score: ScoreId,
        creator: UserId,
        comment: impl Into<String>,
        opened_at: DateTime<Utc>,
    ) -> Self {
        Self {
            score,
            creator,
            comment: comment.into(),
            answer: None,
            opened_at,
            closed_at: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.closed_at.is_none()
    }

    pub fn answered(&self) -> bool {
        self.answer
            .as_deref()
            .is_some_and(|answer| !answer.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn blank_answer_does_not_count_as_answered() {
        let opened = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let mut claim = Claim::new(ScoreId(1), UserId(1), UserId(2), "weight mismatch", opened);
        assert!(claim.is_open());
        assert!(!claim.answered());

        claim.answer = Some("   ".to_string());
        assert!(!claim.answered());

        claim.answer = Some("fixed in revision".to_string());
        assert!(claim.answered());
    }
}
