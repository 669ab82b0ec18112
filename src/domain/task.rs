use serde::{Deserialize, Serialize};

use super::monitoring::{MonitoringSnapshot, OrgId};
use super::user::UserId;

/// Identifier wrapper for scoring tasks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TaskId(pub u32);

/// One-directional task workflow: opened for scoring, closed by the executor,
/// approved by a super-reviewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskStatus {
    Open,
    Ready,
    Approved,
}

impl TaskStatus {
    pub const fn label(self) -> &'static str {
        match self {
            TaskStatus::Open => "opened",
            TaskStatus::Ready => "closed",
            TaskStatus::Approved => "approved",
        }
    }
}

/// Snapshot of a scoring task: one organization, one assigned executor, and
/// the monitoring cycle it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    pub id: TaskId,
    pub organization: OrgId,
    pub executor: UserId,
    pub status: TaskStatus,
    pub monitoring: MonitoringSnapshot,
}

impl TaskSnapshot {
    pub fn is_open(&self) -> bool {
        self.status == TaskStatus::Open
    }

    pub fn is_ready(&self) -> bool {
        self.status == TaskStatus::Ready
    }

    pub fn is_approved(&self) -> bool {
        self.status == TaskStatus::Approved
    }
}
