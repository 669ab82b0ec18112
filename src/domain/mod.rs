//! Read-only entity snapshots consumed by the scoring and permission engines.
//!
//! The surrounding persistence layer owns these entities; the core only ever
//! reads them. Each snapshot carries the relationship facts the engines need
//! (assigned tasks, represented organizations, parameter exclusions) so that
//! evaluation stays a pure in-memory computation.

mod feedback;
mod monitoring;
mod parameter;
mod score;
mod task;
mod user;

pub use feedback::{Claim, Clarification};
pub use monitoring::{MonitoringId, MonitoringPhase, MonitoringSnapshot, OrgId};
pub use parameter::{ParameterId, ParameterSnapshot, RelevanceFlags};
pub use score::{CriterionRatings, Revision, ScoreId, ScoreSnapshot};
pub use task::{TaskId, TaskSnapshot, TaskStatus};
pub use user::{UserId, UserSnapshot};
