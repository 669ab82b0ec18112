use crate::domain::{TaskSnapshot, UserSnapshot};

use super::Privilege;

pub(super) fn allowed(user: &UserSnapshot, privilege: Privilege, task: &TaskSnapshot) -> bool {
    // Super-reviewers hold every task privilege.
    if user.is_expert_a {
        return true;
    }

    let phase = task.monitoring.phase;

    match privilege {
        Privilege::ViewTask => view_task(user, task),
        Privilege::CloseTask => user.executes(task) && task.is_open() && phase.is_rate(),
        Privilege::OpenTask => user.executes(task) && task.is_ready() && phase.is_rate(),
        Privilege::FillTask => {
            user.executes(task)
                && (phase.is_interaction()
                    || phase.is_finalizing()
                    || (phase.is_rate() && task.is_open()))
        }
        Privilege::ViewOpenness => {
            user.is_expert_b || user.represents(task.organization) || phase.is_published()
        }
        Privilege::ViewComments => {
            phase.after_interaction()
                && (user.executes(task) || user.represents(task.organization))
        }
        // approve_task is reserved to super-reviewers, handled by the bypass.
        _ => false,
    }
}

pub(super) fn view_task(user: &UserSnapshot, task: &TaskSnapshot) -> bool {
    let monitoring = &task.monitoring;

    // Approved tasks of a published, non-hidden cycle are public.
    if task.is_approved() && monitoring.phase.is_published() && !monitoring.hidden {
        return true;
    }

    if user.executes(task) {
        return true;
    }

    if task.is_approved()
        && monitoring.phase.after_interaction()
        && (user.represents(task.organization) || user.observes(monitoring.id, task.organization))
    {
        return true;
    }

    false
}
