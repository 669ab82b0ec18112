use serde::{Deserialize, Serialize};

use super::parameter::ParameterId;
use super::task::TaskId;

/// Identifier wrapper for score rows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ScoreId(pub u32);

/// Snapshot tag distinguishing the current score row from the baseline taken
/// when the interaction phase opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Revision {
    #[default]
    Current,
    Initial,
}

impl Revision {
    pub const fn label(self) -> &'static str {
        match self {
            Revision::Current => "default",
            Revision::Initial => "initial",
        }
    }
}

/// Ordinal ratings for each criterion, `None` when the criterion is not
/// relevant for the parameter or the subject was not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CriterionRatings {
    /// 0-3.
    pub complete: Option<u8>,
    /// 0-3.
    pub topical: Option<u8>,
    /// 0-3.
    pub accessible: Option<u8>,
    /// 0-1.
    pub hypertext: Option<u8>,
    /// 0-1.
    pub document: Option<u8>,
    /// 0-1.
    pub image: Option<u8>,
}

impl CriterionRatings {
    /// Top rating on every criterion, as recorded for a fully open parameter.
    pub const fn maxed() -> Self {
        Self {
            complete: Some(3),
            topical: Some(3),
            accessible: Some(3),
            hypertext: Some(1),
            document: Some(1),
            image: Some(1),
        }
    }

    pub const fn none() -> Self {
        Self {
            complete: None,
            topical: None,
            accessible: None,
            hypertext: None,
            document: None,
            image: None,
        }
    }
}

/// One score row for a (task, parameter, revision) triple.
///
/// Invariant maintained by the persistence layer: `found == false` implies all
/// ratings are `None`; `found == true` implies every criterion relevant for
/// the parameter carries a rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub id: ScoreId,
    pub task: TaskId,
    pub parameter: ParameterId,
    pub found: bool,
    pub ratings: CriterionRatings,
    pub revision: Revision,
}

impl ScoreSnapshot {
    pub fn not_found(id: ScoreId, task: TaskId, parameter: ParameterId) -> Self {
        Self {
            id,
            task,
            parameter,
            found: false,
            ratings: CriterionRatings::none(),
            revision: Revision::Current,
        }
    }
}
