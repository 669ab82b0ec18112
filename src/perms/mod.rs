//! Permission evaluator: a pure decision function over (user, privilege,
//! target) triples.
//!
//! Every legal (object kind, privilege) pair is enumerated in a static
//! whitelist consulted before dispatch; anything undeclared is denied rather
//! than raised. The per-kind rule tables live in the sibling modules. The
//! evaluator never mutates anything; callers perform the actual state change
//! after a check passes.

mod monitoring;
mod parameter;
mod score;
mod task;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{MonitoringSnapshot, ParameterSnapshot, TaskSnapshot, UserSnapshot};

/// Closed set of object kinds a privilege can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Monitoring,
    Task,
    Score,
    Parameter,
}

/// Every privilege used across the platform. Requesting one against the
/// wrong object kind is denied by the whitelist, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Privilege {
    // monitoring
    AdminMonitoring,
    CreateMonitoring,
    EditMonitoring,
    DeleteMonitoring,
    ViewMonitoring,
    // task
    ViewTask,
    FillTask,
    OpenTask,
    CloseTask,
    ApproveTask,
    ViewOpenness,
    ViewComments,
    // score
    ViewScore,
    EditScore,
    DeleteScore,
    AddCommentScore,
    ViewCommentScore,
    CloseCommentScore,
    ViewClaimScore,
    AddClaimScore,
    AnswerClaimScore,
    DeleteClaimScore,
    ViewClarificationScore,
    AddClarificationScore,
    AnswerClarificationScore,
    // parameter
    ExcludeParameter,
}

impl Privilege {
    pub const fn as_str(self) -> &'static str {
        match self {
            Privilege::AdminMonitoring => "admin_monitoring",
            Privilege::CreateMonitoring => "create_monitoring",
            Privilege::EditMonitoring => "edit_monitoring",
            Privilege::DeleteMonitoring => "delete_monitoring",
            Privilege::ViewMonitoring => "view_monitoring",
            Privilege::ViewTask => "view_task",
            Privilege::FillTask => "fill_task",
            Privilege::OpenTask => "open_task",
            Privilege::CloseTask => "close_task",
            Privilege::ApproveTask => "approve_task",
            Privilege::ViewOpenness => "view_openness",
            Privilege::ViewComments => "view_comments",
            Privilege::ViewScore => "view_score",
            Privilege::EditScore => "edit_score",
            Privilege::DeleteScore => "delete_score",
            Privilege::AddCommentScore => "add_comment_score",
            Privilege::ViewCommentScore => "view_comment_score",
            Privilege::CloseCommentScore => "close_comment_score",
            Privilege::ViewClaimScore => "view_claim_score",
            Privilege::AddClaimScore => "add_claim_score",
            Privilege::AnswerClaimScore => "answer_claim_score",
            Privilege::DeleteClaimScore => "delete_claim_score",
            Privilege::ViewClarificationScore => "view_clarification_score",
            Privilege::AddClarificationScore => "add_clarification_score",
            Privilege::AnswerClarificationScore => "answer_clarification_score",
            Privilege::ExcludeParameter => "exclude_parameter",
        }
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for the string boundary; callers that hold unknown privilege
/// strings should treat the parse failure as a denial.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown privilege '{0}'")]
pub struct UnknownPrivilege(String);

impl FromStr for Privilege {
    type Err = UnknownPrivilege;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let privilege = match value {
            "admin_monitoring" => Privilege::AdminMonitoring,
            "create_monitoring" => Privilege::CreateMonitoring,
            "edit_monitoring" => Privilege::EditMonitoring,
            "delete_monitoring" => Privilege::DeleteMonitoring,
            "view_monitoring" => Privilege::ViewMonitoring,
            "view_task" => Privilege::ViewTask,
            "fill_task" => Privilege::FillTask,
            "open_task" => Privilege::OpenTask,
            "close_task" => Privilege::CloseTask,
            "approve_task" => Privilege::ApproveTask,
            "view_openness" => Privilege::ViewOpenness,
            "view_comments" => Privilege::ViewComments,
            "view_score" => Privilege::ViewScore,
            "edit_score" => Privilege::EditScore,
            "delete_score" => Privilege::DeleteScore,
            "add_comment_score" => Privilege::AddCommentScore,
            "view_comment_score" => Privilege::ViewCommentScore,
            "close_comment_score" => Privilege::CloseCommentScore,
            "view_claim_score" => Privilege::ViewClaimScore,
            "add_claim_score" => Privilege::AddClaimScore,
            "answer_claim_score" => Privilege::AnswerClaimScore,
            "delete_claim_score" => Privilege::DeleteClaimScore,
            "view_clarification_score" => Privilege::ViewClarificationScore,
            "add_clarification_score" => Privilege::AddClarificationScore,
            "answer_clarification_score" => Privilege::AnswerClarificationScore,
            "exclude_parameter" => Privilege::ExcludeParameter,
            other => return Err(UnknownPrivilege(other.to_string())),
        };
        Ok(privilege)
    }
}

const MONITORING_PERMISSIONS: &[Privilege] = &[
    Privilege::ViewMonitoring,
    Privilege::DeleteMonitoring,
    Privilege::EditMonitoring,
    Privilege::CreateMonitoring,
    Privilege::AdminMonitoring,
];

const TASK_PERMISSIONS: &[Privilege] = &[
    Privilege::ViewTask,
    Privilege::FillTask,
    Privilege::OpenTask,
    Privilege::CloseTask,
    Privilege::ApproveTask,
    Privilege::ViewOpenness,
    Privilege::ViewComments,
];

const SCORE_PERMISSIONS: &[Privilege] = &[
    Privilege::ViewScore,
    Privilege::EditScore,
    Privilege::DeleteScore,
    Privilege::AddCommentScore,
    Privilege::ViewCommentScore,
    Privilege::CloseCommentScore,
    Privilege::ViewClaimScore,
    Privilege::AddClaimScore,
    Privilege::AnswerClaimScore,
    Privilege::DeleteClaimScore,
    Privilege::ViewClarificationScore,
    Privilege::AddClarificationScore,
    Privilege::AnswerClarificationScore,
];

const PARAMETER_PERMISSIONS: &[Privilege] = &[Privilege::ExcludeParameter];

/// Whitelist of every legal (object kind, privilege) pair.
pub fn existing_permissions(kind: ObjectKind) -> &'static [Privilege] {
    match kind {
        ObjectKind::Monitoring => MONITORING_PERMISSIONS,
        ObjectKind::Task => TASK_PERMISSIONS,
        ObjectKind::Score => SCORE_PERMISSIONS,
        ObjectKind::Parameter => PARAMETER_PERMISSIONS,
    }
}

/// A score in its relational context: the parent task plus the scored
/// parameter, which carries the per-organization exclusion set.
#[derive(Debug, Clone, Copy)]
pub struct ScoreContext<'a> {
    pub task: &'a TaskSnapshot,
    pub parameter: &'a ParameterSnapshot,
}

impl ScoreContext<'_> {
    /// Whether the scored parameter is excluded for the task's organization.
    pub fn parameter_excluded(&self) -> bool {
        self.parameter.excluded_for(self.task.organization)
    }
}

/// Target of a permission check.
#[derive(Debug, Clone, Copy)]
pub enum PermissionTarget<'a> {
    Monitoring(&'a MonitoringSnapshot),
    Task(&'a TaskSnapshot),
    Score(ScoreContext<'a>),
    Parameter(&'a ParameterSnapshot),
}

impl PermissionTarget<'_> {
    pub fn kind(&self) -> ObjectKind {
        match self {
            PermissionTarget::Monitoring(_) => ObjectKind::Monitoring,
            PermissionTarget::Task(_) => ObjectKind::Task,
            PermissionTarget::Score(_) => ObjectKind::Score,
            PermissionTarget::Parameter(_) => ObjectKind::Parameter,
        }
    }
}

/// Decide whether `user` holds `privilege` on `target`.
///
/// Without a target only the global `create_monitoring` privilege exists.
/// The function always resolves to a boolean; unknown combinations are
/// denied, never raised.
pub fn check_permission(
    user: &UserSnapshot,
    privilege: Privilege,
    target: Option<&PermissionTarget<'_>>,
) -> bool {
    let Some(target) = target else {
        return privilege == Privilege::CreateMonitoring && user.is_expert_a;
    };

    if !existing_permissions(target.kind()).contains(&privilege) {
        tracing::debug!(
            privilege = %privilege,
            kind = ?target.kind(),
            "privilege not declared for object kind, denying"
        );
        return false;
    }

    match target {
        PermissionTarget::Monitoring(monitoring) => {
            monitoring::allowed(user, privilege, monitoring)
        }
        PermissionTarget::Task(task) => task::allowed(user, privilege, task),
        PermissionTarget::Score(score) => score::allowed(user, privilege, score),
        PermissionTarget::Parameter(parameter) => parameter::allowed(user, privilege, parameter),
    }
}

/// String-typed boundary for callers holding raw privilege names. Unknown
/// names are denied (fail-closed).
pub fn check_permission_str(
    user: &UserSnapshot,
    privilege: &str,
    target: Option<&PermissionTarget<'_>>,
) -> bool {
    match privilege.parse::<Privilege>() {
        Ok(privilege) => check_permission(user, privilege, target),
        Err(err) => {
            tracing::debug!(%err, "denying unparseable privilege");
            false
        }
    }
}
