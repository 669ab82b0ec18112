use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::monitoring::{MonitoringId, OrgId};

/// Identifier wrapper for openness parameters.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ParameterId(pub u32);

/// Per-parameter criterion relevance. A `false` flag means the criterion does
/// not apply to this parameter and must stay neutral in the formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RelevanceFlags {
    pub complete: bool,
    pub topical: bool,
    pub accessible: bool,
    pub hypertext: bool,
    /// Scored independently under v8; under v1 only gates the hypertext branch.
    pub document: bool,
    /// v8 only.
    pub image: bool,
}

impl RelevanceFlags {
    pub const ALL: Self = Self {
        complete: true,
        topical: true,
        accessible: true,
        hypertext: true,
        document: true,
        image: true,
    };

    pub const NONE: Self = Self {
        complete: false,
        topical: false,
        accessible: false,
        hypertext: false,
        document: false,
        image: false,
    };
}

/// Snapshot of an openness parameter within a monitoring cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSnapshot {
    pub id: ParameterId,
    pub monitoring: MonitoringId,
    /// Signed weight flowing unmodified into the weighted sum. Negative
    /// weights contribute to the numerator but never to the denominator.
    pub weight: i32,
    /// Marks normative-act parameters, used for rating splits.
    pub npa: bool,
    pub relevance: RelevanceFlags,
    /// Organizations for which this parameter is excluded from scoring.
    pub excluded_organizations: BTreeSet<OrgId>,
}

impl ParameterSnapshot {
    pub fn new(id: ParameterId, monitoring: MonitoringId, weight: i32) -> Self {
        Self {
            id,
            monitoring,
            weight,
            npa: false,
            relevance: RelevanceFlags::ALL,
            excluded_organizations: BTreeSet::new(),
        }
    }

    pub fn excluded_for(&self, organization: OrgId) -> bool {
        self.excluded_organizations.contains(&organization)
    }
}
