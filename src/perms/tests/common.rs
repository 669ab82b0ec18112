use crate::domain::{
    MonitoringId, MonitoringPhase, MonitoringSnapshot, OrgId, ParameterId, ParameterSnapshot,
    TaskId, TaskSnapshot, TaskStatus, UserId, UserSnapshot,
};
use crate::openness::FormulaVersion;

pub(super) const MONITORING: MonitoringId = MonitoringId(1);
pub(super) const ORG: OrgId = OrgId(10);
pub(super) const EXECUTOR: UserId = UserId(100);

pub(super) fn monitoring(phase: MonitoringPhase) -> MonitoringSnapshot {
    let mut snapshot = MonitoringSnapshot::new(MONITORING, phase, FormulaVersion::V8);
    snapshot.organizations_with_approved_tasks.insert(ORG);
    snapshot
}

pub(super) fn task(phase: MonitoringPhase, status: TaskStatus) -> TaskSnapshot {
    TaskSnapshot {
        id: TaskId(1),
        organization: ORG,
        executor: EXECUTOR,
        status,
        monitoring: monitoring(phase),
    }
}

pub(super) fn approved_task(phase: MonitoringPhase) -> TaskSnapshot {
    task(phase, TaskStatus::Approved)
}

pub(super) fn parameter() -> ParameterSnapshot {
    ParameterSnapshot::new(ParameterId(1), MONITORING, 10)
}

pub(super) fn excluded_parameter() -> ParameterSnapshot {
    let mut parameter = parameter();
    parameter.excluded_organizations.insert(ORG);
    parameter
}

pub(super) fn expert_a() -> UserSnapshot {
    UserSnapshot {
        is_expert_a: true,
        ..UserSnapshot::with_id(UserId(1))
    }
}

pub(super) fn executor() -> UserSnapshot {
    let mut user = UserSnapshot::with_id(EXECUTOR);
    user.is_expert_b = true;
    user.assigned_monitorings.insert(MONITORING);
    user
}

pub(super) fn other_expert_b() -> UserSnapshot {
    let mut user = UserSnapshot::with_id(UserId(101));
    user.is_expert_b = true;
    user
}

pub(super) fn representative() -> UserSnapshot {
    let mut user = UserSnapshot::with_id(UserId(200));
    user.is_organization = true;
    user.organizations.insert(ORG);
    user
}

pub(super) fn observer() -> UserSnapshot {
    let mut user = UserSnapshot::with_id(UserId(300));
    user.observed.entry(MONITORING).or_default().insert(ORG);
    user
}
