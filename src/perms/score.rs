use crate::domain::{MonitoringPhase, UserSnapshot};

use super::{task, Privilege, ScoreContext};

pub(super) fn allowed(user: &UserSnapshot, privilege: Privilege, score: &ScoreContext<'_>) -> bool {
    let task_snapshot = score.task;
    let phase = task_snapshot.monitoring.phase;

    match privilege {
        // Scores of excluded parameters are invisible to everyone, super-
        // reviewers included.
        Privilege::ViewScore => {
            !score.parameter_excluded()
                && task::allowed(user, Privilege::ViewTask, task_snapshot)
        }
        Privilege::EditScore => !score.parameter_excluded() && may_change_score(user, score),
        Privilege::DeleteScore => may_change_score(user, score),

        Privilege::AddCommentScore => {
            if user.is_expert_a && phase.after_interaction() {
                return true;
            }
            if user.is_expert_b
                && !user.is_expert_a
                && user.executes(task_snapshot)
                && (phase.is_interaction() || phase.is_finalizing())
            {
                return true;
            }
            user.represents(task_snapshot.organization)
                && task_snapshot.is_approved()
                && phase.is_interaction()
        }
        Privilege::ViewCommentScore => {
            phase.after_interaction()
                && (user.is_expert_a
                    || (user.is_expert_b && user.executes(task_snapshot))
                    || user.represents(task_snapshot.organization))
        }
        Privilege::CloseCommentScore => user.is_expert_a && phase.after_interaction(),

        Privilege::ViewClaimScore | Privilege::ViewClarificationScore => {
            !phase.is_pre() && (user.is_expert_a || user.executes(task_snapshot))
        }
        Privilege::AnswerClaimScore | Privilege::AnswerClarificationScore => {
            (user.is_expert_a || user.executes(task_snapshot))
                && matches!(
                    phase,
                    MonitoringPhase::Rate
                        | MonitoringPhase::Interaction
                        | MonitoringPhase::Finalizing
                )
        }
        Privilege::AddClaimScore | Privilege::AddClarificationScore => {
            user.is_expert_a
                && matches!(phase, MonitoringPhase::Rate | MonitoringPhase::Result)
        }
        Privilege::DeleteClaimScore => user.is_expert_a,

        _ => false,
    }
}

/// Shared rule behind `edit_score` and `delete_score`.
fn may_change_score(user: &UserSnapshot, score: &ScoreContext<'_>) -> bool {
    let task_snapshot = score.task;
    let phase = task_snapshot.monitoring.phase;

    if user.is_expert_a {
        return matches!(
            phase,
            MonitoringPhase::Rate
                | MonitoringPhase::Interaction
                | MonitoringPhase::Result
                | MonitoringPhase::Finalizing
        );
    }

    user.executes(task_snapshot)
        && (phase.is_interaction()
            || phase.is_finalizing()
            || (phase.is_rate() && task_snapshot.is_open()))
}
