use crate::domain::{MonitoringSnapshot, UserSnapshot};

use super::Privilege;

pub(super) fn allowed(
    user: &UserSnapshot,
    privilege: Privilege,
    monitoring: &MonitoringSnapshot,
) -> bool {
    match privilege {
        Privilege::AdminMonitoring | Privilege::CreateMonitoring | Privilege::EditMonitoring => {
            user.is_expert_a
        }
        Privilege::DeleteMonitoring => user.is_expert_a && !monitoring.phase.is_published(),
        Privilege::ViewMonitoring => view_monitoring(user, monitoring),
        _ => false,
    }
}

fn view_monitoring(user: &UserSnapshot, monitoring: &MonitoringSnapshot) -> bool {
    // Published non-hidden cycles with at least one approved task are public,
    // anonymous visitors included.
    if monitoring.phase.is_published() && !monitoring.hidden && monitoring.has_approved_tasks() {
        return true;
    }

    if user.is_superuser || user.is_expert_a {
        return true;
    }

    if user.is_expert_b
        && monitoring.phase.is_active()
        && user.has_assigned_task_in(monitoring.id)
    {
        return true;
    }

    if user.is_organization
        && monitoring.phase.after_interaction()
        && user
            .organizations
            .iter()
            .any(|org| monitoring.organizations_with_approved_tasks.contains(org))
    {
        return true;
    }

    // Observers see the cycle while interaction is underway.
    if user.observes_monitoring(monitoring.id)
        && (monitoring.phase.is_interaction() || monitoring.phase.is_finalizing())
    {
        return true;
    }

    false
}
