//! Openness scoring and permission evaluation for monitoring cycles.
//!
//! A monitoring cycle rates organization websites against weighted openness
//! parameters. Expert reviewers fill per-parameter scores, organizations
//! respond during the interaction phase, and the cycle ends with a published
//! rating. This crate owns the two pure pieces of that system:
//!
//! - [`openness`] converts a task's (parameter, score) pairs into a weighted
//!   openness percentage under one of two formula versions.
//! - [`perms`] decides whether a user may perform a given action on a
//!   monitoring, task, score, or parameter, based on role flags and the
//!   monitoring phase.
//!
//! Both subsystems read already-fetched [`domain`] snapshots and return plain
//! values. Persistence, HTTP, and rendering live in the surrounding services.

pub mod config;
pub mod domain;
pub mod openness;
pub mod perms;
pub mod telemetry;

pub use config::{ConfigError, EngineConfig};
pub use domain::{
    Claim, Clarification, CriterionRatings, MonitoringId, MonitoringPhase, MonitoringSnapshot,
    OrgId, ParameterId, ParameterSnapshot, RelevanceFlags, Revision, ScoreId, ScoreSnapshot,
    TaskId, TaskSnapshot, TaskStatus, UserId, UserSnapshot,
};
pub use openness::{
    compute_openness, FormulaVersion, FormulaVersionError, OpennessCalculator, RevisionMode,
    ScoreValues, ScoredParameter,
};
pub use perms::{
    check_permission, check_permission_str, existing_permissions, ObjectKind, PermissionTarget,
    Privilege, ScoreContext,
};
