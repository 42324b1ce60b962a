use serde::{Deserialize, Serialize};

pub const SKILLS_WEIGHT: f64 = 0.40;
pub const EXPERIENCE_WEIGHT: f64 = 0.25;
pub const SALARY_WEIGHT: f64 = 0.20;
pub const LOCATION_WEIGHT: f64 = 0.10;
pub const JOB_TYPE_WEIGHT: f64 = 0.05;

/// Matches scoring at or below this are dropped from ranked results.
pub const RELEVANCE_FLOOR: f64 = 0.3;

/// Sub-scores above this set the boolean `*_match` flags on a result.
pub const FLAG_THRESHOLD: f64 = 0.7;

pub const DEFAULT_WEIGHTS: Weights = Weights {
    skills: SKILLS_WEIGHT,
    experience: EXPERIENCE_WEIGHT,
    salary: SALARY_WEIGHT,
    location: LOCATION_WEIGHT,
    job_type: JOB_TYPE_WEIGHT,
};

/// Main scoring configuration.
///
/// Every field falls back to the built-in policy, so a partial section only
/// overrides what it names. The criterion weights are not part of it: the
/// overall score always uses [`DEFAULT_WEIGHTS`].
///
/// Example YAML:
/// ```yaml
/// scoring:
///   relevance_floor: 0.4
///   cutoffs:
///     skills: { strength: 0.75, improvement: 0.25 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ScoringConfig {
    pub relevance_floor: f64,
    pub flag_threshold: f64,
    pub cutoffs: CutoffConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            relevance_floor: RELEVANCE_FLOOR,
            flag_threshold: FLAG_THRESHOLD,
            cutoffs: CutoffConfig::default(),
        }
    }
}

/// Per-criterion weights, summing to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub skills: f64,
    pub experience: f64,
    pub salary: f64,
    pub location: f64,
    pub job_type: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.salary + self.location + self.job_type
    }

    /// Weighted sum of the five sub-scores.
    pub fn combine(&self, scores: &SubScores) -> f64 {
        scores.skills * self.skills
            + scores.experience * self.experience
            + scores.salary * self.salary
            + scores.location * self.location
            + scores.job_type * self.job_type
    }
}

/// Per-criterion scores, each in [0, 1].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SubScores {
    pub skills: f64,
    pub experience: f64,
    pub salary: f64,
    pub location: f64,
    pub job_type: f64,
}

/// Narrative cutoffs for one criterion.
///
/// A sub-score strictly above `strength` yields a strength line, strictly below
/// `improvement` yields an improvement suggestion.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Cutoffs {
    pub strength: f64,
    pub improvement: f64,
}

impl Cutoffs {
    pub const fn new(strength: f64, improvement: f64) -> Self {
        Self {
            strength,
            improvement,
        }
    }
}

pub const SKILLS_CUTOFFS: Cutoffs = Cutoffs::new(0.7, 0.3);
pub const EXPERIENCE_CUTOFFS: Cutoffs = Cutoffs::new(0.8, 0.5);
pub const SALARY_CUTOFFS: Cutoffs = Cutoffs::new(0.8, 0.5);
pub const LOCATION_CUTOFFS: Cutoffs = Cutoffs::new(0.8, 0.5);

/// Job type carries no cutoffs: it only ever produces a reason line.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct CutoffConfig {
    pub skills: Cutoffs,
    pub experience: Cutoffs,
    pub salary: Cutoffs,
    pub location: Cutoffs,
}

impl Default for CutoffConfig {
    fn default() -> Self {
        Self {
            skills: SKILLS_CUTOFFS,
            experience: EXPERIENCE_CUTOFFS,
            salary: SALARY_CUTOFFS,
            location: LOCATION_CUTOFFS,
        }
    }
}
