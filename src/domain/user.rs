use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::monitoring::{MonitoringId, OrgId};
use super::task::TaskSnapshot;

/// Identifier wrapper for users.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct UserId(pub u32);

/// Role bundle and relationship facts for one user, as seen by the permission
/// evaluator. Anonymous visitors are represented by [`UserSnapshot::anonymous`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserSnapshot {
    /// `None` for anonymous visitors.
    pub id: Option<UserId>,
    pub is_superuser: bool,
    /// Super-reviewer with broad override authority.
    pub is_expert_a: bool,
    /// Task executor role.
    pub is_expert_b: bool,
    /// Organization representative role.
    pub is_organization: bool,
    /// Organizations the user represents.
    pub organizations: BTreeSet<OrgId>,
    /// Observer grants: organizations visible per monitoring cycle.
    pub observed: BTreeMap<MonitoringId, BTreeSet<OrgId>>,
    /// Monitoring cycles in which the user has an assigned task.
    pub assigned_monitorings: BTreeSet<MonitoringId>,
}

impl UserSnapshot {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_id(id: UserId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.id.is_some()
    }

    /// Either expert role.
    pub fn is_expert(&self) -> bool {
        self.is_expert_a || self.is_expert_b
    }

    /// Whether this user is the assigned executor of the task.
    pub fn executes(&self, task: &TaskSnapshot) -> bool {
        self.id == Some(task.executor)
    }

    pub fn represents(&self, organization: OrgId) -> bool {
        self.organizations.contains(&organization)
    }

    /// Observer membership in any observers group of the monitoring.
    pub fn observes_monitoring(&self, monitoring: MonitoringId) -> bool {
        self.observed.contains_key(&monitoring)
    }

    /// Observer grant for a specific organization within the monitoring.
    pub fn observes(&self, monitoring: MonitoringId, organization: OrgId) -> bool {
        self.observed
            .get(&monitoring)
            .is_some_and(|orgs| orgs.contains(&organization))
    }

    pub fn has_assigned_task_in(&self, monitoring: MonitoringId) -> bool {
        self.assigned_monitorings.contains(&monitoring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_has_no_roles_or_relations() {
        let user = UserSnapshot::anonymous();
        assert!(!user.is_authenticated());
        assert!(!user.is_expert());
        assert!(!user.represents(OrgId(1)));
        assert!(!user.observes(MonitoringId(1), OrgId(1)));
    }

    #[test]
    fn observer_grant_is_scoped_to_monitoring_and_organization() {
        let mut user = UserSnapshot::with_id(UserId(9));
        user.observed
            .entry(MonitoringId(2))
            .or_default()
            .insert(OrgId(4));

        assert!(user.observes_monitoring(MonitoringId(2)));
        assert!(user.observes(MonitoringId(2), OrgId(4)));
        assert!(!user.observes(MonitoringId(2), OrgId(5)));
        assert!(!user.observes(MonitoringId(3), OrgId(4)));
    }
}
