use std::collections::BTreeSet;

use crate::model::{ExperienceRange, JobType, SalaryRange};

pub const EXPERIENCE_IN_RANGE: f64 = 1.0;
pub const EXPERIENCE_OVERQUALIFIED: f64 = 0.8;
pub const EXPERIENCE_NEAR_MISS: f64 = 0.6;
pub const EXPERIENCE_UNDERQUALIFIED: f64 = 0.2;
/// Fraction of the job minimum that still counts as a near miss.
pub const NEAR_MISS_RATIO: f64 = 0.8;

pub const SALARY_IN_RANGE: f64 = 1.0;
pub const SALARY_BELOW_RANGE: f64 = 0.3;
pub const SALARY_ABOVE_RANGE: f64 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillsMatch {
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Case-insensitive containment in either direction.
///
/// Blank entries never match; an empty string is a substring of everything.
fn fuzzy_contains(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}

/// Trim and lowercase candidate entries, dropping blank ones. A plain
/// substring test would let an empty skill or location match every posting;
/// here it matches nothing.
fn normalize(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Partition the job's required skills into matched and missing, keeping the
/// job's spelling and order.
pub fn skills_match(candidate_skills: &[String], required_skills: &[String]) -> SkillsMatch {
    let candidate = normalize(candidate_skills);
    let (matched, missing): (Vec<String>, Vec<String>) =
        required_skills.iter().cloned().partition(|skill| {
            let skill_lower = skill.trim().to_lowercase();
            candidate.iter().any(|c| fuzzy_contains(c, &skill_lower))
        });

    let score = if required_skills.is_empty() {
        0.0
    } else {
        matched.len() as f64 / required_skills.len() as f64
    };

    SkillsMatch {
        score,
        matched,
        missing,
    }
}

pub fn experience_score(years: u32, range: &ExperienceRange) -> f64 {
    if range.contains(years) {
        EXPERIENCE_IN_RANGE
    } else if years > range.max {
        EXPERIENCE_OVERQUALIFIED
    } else if years as f64 >= range.min as f64 * NEAR_MISS_RATIO {
        EXPERIENCE_NEAR_MISS
    } else {
        EXPERIENCE_UNDERQUALIFIED
    }
}

pub fn salary_score(desired: &SalaryRange, offered: &SalaryRange) -> f64 {
    let mid = desired.midpoint();
    if mid < offered.min as f64 {
        SALARY_BELOW_RANGE
    } else if mid > offered.max as f64 {
        SALARY_ABOVE_RANGE
    } else {
        SALARY_IN_RANGE
    }
}

/// Remote jobs satisfy any location preference, including none at all.
pub fn location_score(desired: &[String], job_location: &str, remote: bool) -> f64 {
    if remote {
        return 1.0;
    }
    let job_location = job_location.trim().to_lowercase();
    let hit = normalize(desired)
        .iter()
        .any(|loc| fuzzy_contains(&job_location, loc));
    if hit {
        1.0
    } else {
        0.0
    }
}

pub fn job_type_score(accepted: &BTreeSet<JobType>, job_type: JobType) -> f64 {
    if accepted.contains(&job_type) {
        1.0
    } else {
        0.0
    }
}
