use super::common::{expert_a, executor, monitoring, observer, representative, ORG};
use crate::domain::{MonitoringPhase, UserSnapshot};
use crate::perms::{check_permission, PermissionTarget, Privilege};

fn check(user: &UserSnapshot, privilege: Privilege, phase: MonitoringPhase) -> bool {
    let snapshot = monitoring(phase);
    check_permission(user, privilege, Some(&PermissionTarget::Monitoring(&snapshot)))
}

#[test]
fn create_monitoring_is_a_global_expert_a_privilege() {
    assert!(check_permission(&expert_a(), Privilege::CreateMonitoring, None));
    assert!(!check_permission(&executor(), Privilege::CreateMonitoring, None));
    assert!(!check_permission(
        &UserSnapshot::anonymous(),
        Privilege::CreateMonitoring,
        None
    ));
}

#[test]
fn no_other_privilege_exists_without_a_target() {
    assert!(!check_permission(&expert_a(), Privilege::ViewMonitoring, None));
    assert!(!check_permission(&expert_a(), Privilege::DeleteClaimScore, None));
}

#[test]
fn admin_and_edit_are_expert_a_only() {
    for privilege in [Privilege::AdminMonitoring, Privilege::EditMonitoring] {
        assert!(check(&expert_a(), privilege, MonitoringPhase::Rate));
        assert!(!check(&executor(), privilege, MonitoringPhase::Rate));
        assert!(!check(&representative(), privilege, MonitoringPhase::Rate));
    }
}

#[test]
fn delete_is_blocked_once_published() {
    assert!(check(&expert_a(), Privilege::DeleteMonitoring, MonitoringPhase::Rate));
    assert!(check(&expert_a(), Privilege::DeleteMonitoring, MonitoringPhase::Finalizing));
    assert!(!check(&expert_a(), Privilege::DeleteMonitoring, MonitoringPhase::Published));
    assert!(!check(&executor(), Privilege::DeleteMonitoring, MonitoringPhase::Rate));
}

#[test]
fn published_non_hidden_monitoring_is_publicly_viewable() {
    let anonymous = UserSnapshot::anonymous();
    assert!(check(&anonymous, Privilege::ViewMonitoring, MonitoringPhase::Published));
    assert!(!check(&anonymous, Privilege::ViewMonitoring, MonitoringPhase::Finalizing));

    let mut hidden = monitoring(MonitoringPhase::Published);
    hidden.hidden = true;
    assert!(!check_permission(
        &anonymous,
        Privilege::ViewMonitoring,
        Some(&PermissionTarget::Monitoring(&hidden))
    ));
    // Super-reviewers still see hidden cycles.
    assert!(check_permission(
        &expert_a(),
        Privilege::ViewMonitoring,
        Some(&PermissionTarget::Monitoring(&hidden))
    ));
}

#[test]
fn published_monitoring_without_approved_tasks_stays_private() {
    let mut snapshot = monitoring(MonitoringPhase::Published);
    snapshot.organizations_with_approved_tasks.clear();
    assert!(!check_permission(
        &UserSnapshot::anonymous(),
        Privilege::ViewMonitoring,
        Some(&PermissionTarget::Monitoring(&snapshot))
    ));
}

#[test]
fn assigned_expert_b_views_active_phases_only() {
    let user = executor();
    assert!(!check(&user, Privilege::ViewMonitoring, MonitoringPhase::Pre));
    assert!(check(&user, Privilege::ViewMonitoring, MonitoringPhase::Rate));
    assert!(check(&user, Privilege::ViewMonitoring, MonitoringPhase::Interaction));

    // Without an assigned task there is no access before publication.
    let unassigned = super::common::other_expert_b();
    assert!(!check(&unassigned, Privilege::ViewMonitoring, MonitoringPhase::Rate));
}

#[test]
fn representative_needs_approved_task_and_interaction_phase() {
    let user = representative();
    assert!(!check(&user, Privilege::ViewMonitoring, MonitoringPhase::Rate));
    assert!(!check(&user, Privilege::ViewMonitoring, MonitoringPhase::Result));
    assert!(check(&user, Privilege::ViewMonitoring, MonitoringPhase::Interaction));
    assert!(check(&user, Privilege::ViewMonitoring, MonitoringPhase::Finalizing));

    let mut no_approved = monitoring(MonitoringPhase::Interaction);
    no_approved.organizations_with_approved_tasks.clear();
    assert!(!check_permission(
        &user,
        Privilege::ViewMonitoring,
        Some(&PermissionTarget::Monitoring(&no_approved))
    ));

    // A representative of some other organization gains nothing.
    let mut outsider = representative();
    outsider.organizations.clear();
    outsider.organizations.insert(crate::domain::OrgId(ORG.0 + 1));
    assert!(!check(&outsider, Privilege::ViewMonitoring, MonitoringPhase::Interaction));
}

#[test]
fn observer_access_is_limited_to_interaction_and_finalizing() {
    let user = observer();
    assert!(!check(&user, Privilege::ViewMonitoring, MonitoringPhase::Rate));
    assert!(check(&user, Privilege::ViewMonitoring, MonitoringPhase::Interaction));
    assert!(check(&user, Privilege::ViewMonitoring, MonitoringPhase::Finalizing));

    let mut elsewhere = user.clone();
    elsewhere.observed.clear();
    assert!(!check(&elsewhere, Privilege::ViewMonitoring, MonitoringPhase::Interaction));
}

#[test]
fn task_privilege_against_monitoring_kind_is_denied() {
    assert!(!check(&expert_a(), Privilege::ViewTask, MonitoringPhase::Rate));
    assert!(!check(&expert_a(), Privilege::DeleteClaimScore, MonitoringPhase::Rate));
}
