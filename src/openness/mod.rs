//! Openness calculator: converts a task's (parameter, score) pairs into a
//! weighted openness percentage in `[0, 100]`.
//!
//! The calculation is deterministic and performs no I/O. Malformed input
//! (violating the score/parameter invariants documented on the domain types)
//! is a caller-side precondition failure, not something the calculator
//! detects; it always returns a value.

mod criteria;
pub mod rating;

use serde::{Deserialize, Serialize};

use crate::domain::{CriterionRatings, RelevanceFlags, ScoreSnapshot};

/// Raised when a monitoring carries an openness expression code other than
/// the two supported formula generations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormulaVersionError {
    #[error("unknown openness expression code {0}")]
    UnknownCode(u32),
}

/// Formula generation selected per monitoring cycle. Exactly one version
/// applies to every parameter and score under a monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormulaVersion {
    /// Document relevance gates the hypertext branch; no independent
    /// document/image criteria.
    V1,
    /// Document and image scored as independent criteria.
    V8,
}

impl FormulaVersion {
    pub fn from_code(code: u32) -> Result<Self, FormulaVersionError> {
        match code {
            1 => Ok(FormulaVersion::V1),
            8 => Ok(FormulaVersion::V8),
            other => Err(FormulaVersionError::UnknownCode(other)),
        }
    }

    pub const fn code(self) -> u32 {
        match self {
            FormulaVersion::V1 => 1,
            FormulaVersion::V8 => 8,
        }
    }
}

/// Which score revision feeds the calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevisionMode {
    /// Current score rows.
    Current,
    /// Baseline rows captured when interaction opened, falling back to the
    /// current row where no baseline was recorded.
    Initial,
}

/// Rated values of one score row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreValues {
    pub found: bool,
    pub ratings: CriterionRatings,
}

impl ScoreValues {
    pub const fn not_found() -> Self {
        Self {
            found: false,
            ratings: CriterionRatings::none(),
        }
    }

    pub const fn perfect() -> Self {
        Self {
            found: true,
            ratings: CriterionRatings::maxed(),
        }
    }
}

impl From<&ScoreSnapshot> for ScoreValues {
    fn from(score: &ScoreSnapshot) -> Self {
        Self {
            found: score.found,
            ratings: score.ratings,
        }
    }
}

/// One parameter of a task together with its score rows, flattened for the
/// calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredParameter {
    pub weight: i32,
    pub relevance: RelevanceFlags,
    /// Normative-act parameter, used for rating splits.
    pub npa: bool,
    /// Excluded for this task's organization; removed from numerator and
    /// denominator alike.
    pub excluded: bool,
    /// Revision 0 row, if scored.
    pub current: Option<ScoreValues>,
    /// Revision 1 baseline row, if one was captured.
    pub initial: Option<ScoreValues>,
}

impl ScoredParameter {
    pub fn new(weight: i32, relevance: RelevanceFlags, current: ScoreValues) -> Self {
        Self {
            weight,
            relevance,
            npa: false,
            excluded: false,
            current: Some(current),
            initial: None,
        }
    }

    fn values_for(&self, mode: RevisionMode) -> Option<&ScoreValues> {
        match mode {
            RevisionMode::Current => self.current.as_ref(),
            RevisionMode::Initial => self.initial.as_ref().or(self.current.as_ref()),
        }
    }
}

/// Stateless calculator bound to one formula version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpennessCalculator {
    version: FormulaVersion,
}

impl OpennessCalculator {
    pub fn new(version: FormulaVersion) -> Self {
        Self { version }
    }

    pub fn from_code(code: u32) -> Result<Self, FormulaVersionError> {
        Ok(Self::new(FormulaVersion::from_code(code)?))
    }

    pub fn version(&self) -> FormulaVersion {
        self.version
    }

    /// Weighted contribution of a single scored parameter:
    /// `weight x found x product of relevant criterion multipliers`.
    /// An unscored or excluded parameter contributes zero.
    pub fn contribution(&self, parameter: &ScoredParameter, mode: RevisionMode) -> f64 {
        if parameter.excluded {
            return 0.0;
        }
        let Some(values) = parameter.values_for(mode) else {
            return 0.0;
        };
        if !values.found {
            return 0.0;
        }
        f64::from(parameter.weight) * criteria::multiplier(self.version, parameter.relevance, values.ratings)
    }

    /// Task openness over the full parameter set.
    pub fn openness(&self, parameters: &[ScoredParameter], mode: RevisionMode) -> f64 {
        self.openness_filtered(parameters, mode, |_| true)
    }

    /// Task openness restricted to parameters matching the filter, mirroring
    /// rating splits over parameter subsets. The denominator only counts
    /// non-negative weights; a zero denominator yields 0.0.
    pub fn openness_filtered(
        &self,
        parameters: &[ScoredParameter],
        mode: RevisionMode,
        filter: impl Fn(&ScoredParameter) -> bool,
    ) -> f64 {
        let mut numerator = 0.0;
        let mut denominator = 0i64;

        for parameter in parameters {
            if parameter.excluded || !filter(parameter) {
                continue;
            }
            numerator += self.contribution(parameter, mode);
            if parameter.weight >= 0 {
                denominator += i64::from(parameter.weight);
            }
        }

        if denominator == 0 {
            tracing::trace!("openness denominator is zero, defining result as 0.0");
            return 0.0;
        }

        100.0 * numerator / denominator as f64
    }

    /// Openness over normative-act parameters only. `None` when the cycle has
    /// no such parameters.
    pub fn openness_npa(&self, parameters: &[ScoredParameter], mode: RevisionMode) -> Option<f64> {
        if !parameters.iter().any(|p| p.npa) {
            return None;
        }
        Some(self.openness_filtered(parameters, mode, |p| p.npa))
    }

    /// Openness over the remaining, non-normative parameters. `None` when
    /// every parameter is normative.
    pub fn openness_other(
        &self,
        parameters: &[ScoredParameter],
        mode: RevisionMode,
    ) -> Option<f64> {
        if !parameters.iter().any(|p| !p.npa) {
            return None;
        }
        Some(self.openness_filtered(parameters, mode, |p| !p.npa))
    }

    /// Share of non-excluded parameters that carry a current score row, as a
    /// percentage. Drives task completeness reporting.
    pub fn completeness(&self, parameters: &[ScoredParameter]) -> f64 {
        let total = parameters.iter().filter(|p| !p.excluded).count();
        if total == 0 {
            return 0.0;
        }
        let scored = parameters
            .iter()
            .filter(|p| !p.excluded && p.current.is_some())
            .count();
        scored as f64 * 100.0 / total as f64
    }
}

/// Function-shaped entry point matching the external interface contract.
pub fn compute_openness(
    version: FormulaVersion,
    parameters: &[ScoredParameter],
    mode: RevisionMode,
) -> f64 {
    OpennessCalculator::new(version).openness(parameters, mode)
}

/// Half-up rounding applied at the presentation boundary; the internal
/// computation keeps full floating precision.
pub fn round_display(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor + 0.5).floor() / factor
}
