use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::openness::FormulaVersion;

/// Identifier wrapper for monitoring cycles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct MonitoringId(pub u32);

/// Identifier wrapper for organizations under a monitoring.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct OrgId(pub u32);

/// Lifecycle stage of a monitoring cycle. Advances monotonically within a
/// cycle and never regresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MonitoringPhase {
    Pre,
    Rate,
    Result,
    Interaction,
    Finalizing,
    Published,
}

impl MonitoringPhase {
    pub const fn label(self) -> &'static str {
        match self {
            MonitoringPhase::Pre => "prepare",
            MonitoringPhase::Rate => "rate",
            MonitoringPhase::Result => "result",
            MonitoringPhase::Interaction => "interaction",
            MonitoringPhase::Finalizing => "finalizing",
            MonitoringPhase::Published => "published",
        }
    }

    pub const fn is_pre(self) -> bool {
        matches!(self, MonitoringPhase::Pre)
    }

    pub const fn is_rate(self) -> bool {
        matches!(self, MonitoringPhase::Rate)
    }

    pub const fn is_result(self) -> bool {
        matches!(self, MonitoringPhase::Result)
    }

    pub const fn is_interaction(self) -> bool {
        matches!(self, MonitoringPhase::Interaction)
    }

    pub const fn is_finalizing(self) -> bool {
        matches!(self, MonitoringPhase::Finalizing)
    }

    pub const fn is_published(self) -> bool {
        matches!(self, MonitoringPhase::Published)
    }

    /// Anything past the preparation stage counts as an active cycle.
    pub const fn is_active(self) -> bool {
        !matches!(self, MonitoringPhase::Pre)
    }

    /// Stages at which organizations gain visibility into their results.
    pub const fn after_interaction(self) -> bool {
        matches!(
            self,
            MonitoringPhase::Interaction | MonitoringPhase::Finalizing | MonitoringPhase::Published
        )
    }
}

/// Snapshot of a monitoring cycle with the relationship facts the permission
/// evaluator consults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringSnapshot {
    pub id: MonitoringId,
    pub phase: MonitoringPhase,
    /// Suppresses public visibility even when the cycle is published.
    pub hidden: bool,
    /// Formula version applied to every parameter and score under this cycle.
    pub formula: FormulaVersion,
    /// Organizations that currently have an approved task in this cycle.
    pub organizations_with_approved_tasks: BTreeSet<OrgId>,
}

impl MonitoringSnapshot {
    pub fn new(id: MonitoringId, phase: MonitoringPhase, formula: FormulaVersion) -> Self {
        Self {
            id,
            phase,
            hidden: false,
            formula,
            organizations_with_approved_tasks: BTreeSet::new(),
        }
    }

    pub fn has_approved_tasks(&self) -> bool {
        !self.organizations_with_approved_tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_predicates_follow_lifecycle() {
        assert!(!MonitoringPhase::Pre.is_active());
        assert!(MonitoringPhase::Rate.is_active());
        assert!(MonitoringPhase::Published.is_active());

        assert!(!MonitoringPhase::Rate.after_interaction());
        assert!(!MonitoringPhase::Result.after_interaction());
        assert!(MonitoringPhase::Interaction.after_interaction());
        assert!(MonitoringPhase::Finalizing.after_interaction());
        assert!(MonitoringPhase::Published.after_interaction());
    }

    #[test]
    fn approved_task_set_backs_the_predicate() {
        let mut monitoring = MonitoringSnapshot::new(
            MonitoringId(1),
            MonitoringPhase::Published,
            FormulaVersion::V8,
        );
        assert!(!monitoring.has_approved_tasks());

        monitoring.organizations_with_approved_tasks.insert(OrgId(7));
        assert!(monitoring.has_approved_tasks());
    }
}
