use serde::{Deserialize, Serialize};

use super::config::{Cutoffs, ScoringConfig, SubScores, DEFAULT_WEIGHTS};
use super::factors::{
    experience_score, job_type_score, location_score, salary_score, skills_match,
};
use crate::error::MatchError;
use crate::model::{CandidateProfile, JobPosting};

/// Outcome of scoring one candidate against one posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: f64,
    pub breakdown: SubScores,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub reasons: Vec<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub salary_match: bool,
    pub location_match: bool,
    pub experience_match: bool,
}

/// Collects reason, strength and improvement lines criterion by criterion.
#[derive(Default)]
struct Narrative {
    reasons: Vec<String>,
    strengths: Vec<String>,
    improvements: Vec<String>,
}

impl Narrative {
    fn reason(&mut self, label: &str, score: f64) {
        self.reasons.push(format!("{} match: {}%", label, percent(score)));
    }

    fn judge(
        &mut self,
        score: f64,
        cutoffs: Cutoffs,
        strength: impl FnOnce() -> String,
        improvement: impl FnOnce() -> String,
    ) {
        if score > cutoffs.strength {
            self.strengths.push(strength());
        } else if score < cutoffs.improvement {
            self.improvements.push(improvement());
        }
    }
}

/// Score rounded to a whole percentage.
pub fn percent(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

/// Score a candidate against a single posting.
///
/// Both records are checked first; an inverted range is reported instead of
/// producing a meaningless score.
pub fn score_one(
    candidate: &CandidateProfile,
    job: &JobPosting,
    config: &ScoringConfig,
) -> Result<MatchResult, MatchError> {
    candidate.validate()?;
    job.validate()?;
    Ok(score_validated(candidate, job, config))
}

pub(crate) fn score_validated(
    candidate: &CandidateProfile,
    job: &JobPosting,
    config: &ScoringConfig,
) -> MatchResult {
    let cutoffs = &config.cutoffs;
    let mut narrative = Narrative::default();

    let skills = skills_match(&candidate.skills, &job.required_skills);
    narrative.judge(
        skills.score,
        cutoffs.skills,
        || format!("Strong match in {}", skills.matched.join(", ")),
        || format!("Consider learning: {}", skills.missing.join(", ")),
    );
    narrative.reason("Skills", skills.score);

    let experience = experience_score(candidate.experience_years, &job.experience);
    narrative.judge(
        experience,
        cutoffs.experience,
        || "Experience level matches perfectly".to_string(),
        || "Gain more experience in this field".to_string(),
    );
    narrative.reason("Experience", experience);

    let salary = salary_score(&candidate.desired_salary, &job.salary);
    narrative.judge(
        salary,
        cutoffs.salary,
        || "Salary expectations align well".to_string(),
        || "Consider adjusting salary expectations".to_string(),
    );
    narrative.reason("Salary", salary);

    let location = location_score(&candidate.desired_locations, &job.location, job.remote);
    narrative.judge(
        location,
        cutoffs.location,
        || "Location preferences match".to_string(),
        || "Consider remote work or relocation".to_string(),
    );
    narrative.reason("Location", location);

    let job_type = job_type_score(&candidate.job_types, job.job_type);
    narrative.reason("Job type", job_type);

    let breakdown = SubScores {
        skills: skills.score,
        experience,
        salary,
        location,
        job_type,
    };

    MatchResult {
        score: DEFAULT_WEIGHTS.combine(&breakdown),
        breakdown,
        matched_skills: skills.matched,
        missing_skills: skills.missing,
        reasons: narrative.reasons,
        strengths: narrative.strengths,
        improvements: narrative.improvements,
        salary_match: salary > config.flag_threshold,
        location_match: location > config.flag_threshold,
        experience_match: experience > config.flag_threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::fixtures::{candidate, job};
    use crate::model::{ExperienceRange, JobType, SalaryRange};

    #[test]
    fn test_reference_pair() {
        let result = score_one(&candidate(), &job("1"), &ScoringConfig::default()).unwrap();

        assert_eq!(result.breakdown.skills, 0.5);
        assert_eq!(result.breakdown.experience, 1.0);
        assert_eq!(result.breakdown.salary, 1.0);
        assert_eq!(result.breakdown.location, 1.0);
        assert_eq!(result.breakdown.job_type, 1.0);
        // 0.5*0.4 + 0.25 + 0.2 + 0.1 + 0.05
        assert!((result.score - 0.8).abs() < 1e-9);
        assert!(result.salary_match);
        assert!(result.location_match);
        assert!(result.experience_match);
    }

    #[test]
    fn test_reasons_in_criterion_order() {
        let result = score_one(&candidate(), &job("1"), &ScoringConfig::default()).unwrap();
        assert_eq!(
            result.reasons,
            vec![
                "Skills match: 50%",
                "Experience match: 100%",
                "Salary match: 100%",
                "Location match: 100%",
                "Job type match: 100%",
            ]
        );
    }

    #[test]
    fn test_middling_skills_emit_no_skill_narrative() {
        let result = score_one(&candidate(), &job("1"), &ScoringConfig::default()).unwrap();
        assert!(!result.strengths.iter().any(|s| s.starts_with("Strong match")));
        assert!(!result.improvements.iter().any(|s| s.starts_with("Consider learning")));
        assert_eq!(
            result.strengths,
            vec![
                "Experience level matches perfectly",
                "Salary expectations align well",
                "Location preferences match",
            ]
        );
        assert!(result.improvements.is_empty());
    }

    #[test]
    fn test_strong_skills_strength() {
        let mut c = candidate();
        c.skills.push("Redux".to_string());
        c.skills.push("5+ years experience".to_string());
        let result = score_one(&c, &job("1"), &ScoringConfig::default()).unwrap();
        assert_eq!(result.breakdown.skills, 1.0);
        assert_eq!(
            result.strengths[0],
            "Strong match in React Native, TypeScript, Redux, 5+ years experience"
        );
    }

    #[test]
    fn test_weak_candidate_improvements() {
        let c = CandidateProfile {
            id: "u2".to_string(),
            name: String::new(),
            skills: vec!["Python".to_string()],
            experience_years: 1,
            desired_salary: SalaryRange {
                min: 40_000,
                max: 60_000,
            },
            desired_locations: vec!["Denver".to_string()],
            job_types: [JobType::Internship].into_iter().collect(),
            remote_acceptable: false,
        };
        let mut j = job("1");
        j.remote = false;

        let result = score_one(&c, &j, &ScoringConfig::default()).unwrap();
        assert_eq!(result.breakdown.skills, 0.0);
        assert_eq!(result.breakdown.experience, 0.2);
        assert_eq!(result.breakdown.salary, 0.3);
        assert_eq!(result.breakdown.location, 0.0);
        assert_eq!(result.breakdown.job_type, 0.0);
        assert!(result.strengths.is_empty());
        assert_eq!(
            result.improvements,
            vec![
                "Consider learning: React Native, TypeScript, Redux, 5+ years experience",
                "Gain more experience in this field",
                "Consider adjusting salary expectations",
                "Consider remote work or relocation",
            ]
        );
        // 0.2*0.25 + 0.3*0.2
        assert!((result.score - 0.11).abs() < 1e-9);
        assert!(!result.salary_match && !result.location_match && !result.experience_match);
    }

    #[test]
    fn test_overqualified_is_favourable() {
        let mut c = candidate();
        c.experience_years = 15;
        let result = score_one(&c, &job("1"), &ScoringConfig::default()).unwrap();
        assert_eq!(result.breakdown.experience, 0.8);
        assert!(result.experience_match);
        // 0.8 is not strictly above the 0.8 strength cutoff
        assert!(!result
            .strengths
            .contains(&"Experience level matches perfectly".to_string()));
    }

    #[test]
    fn test_score_is_idempotent() {
        let config = ScoringConfig::default();
        let first = score_one(&candidate(), &job("1"), &config).unwrap();
        let second = score_one(&candidate(), &job("1"), &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_score_stays_in_unit_interval() {
        let config = ScoringConfig::default();
        let mut c = candidate();
        for years in [0, 3, 4, 7, 20] {
            for (min, max) in [(0, 0), (50_000, 60_000), (120_000, 200_000), (300_000, 400_000)] {
                for remote in [true, false] {
                    c.experience_years = years;
                    c.desired_salary = SalaryRange { min, max };
                    let mut j = job("1");
                    j.remote = remote;
                    let result = score_one(&c, &j, &config).unwrap();
                    assert!((0.0..=1.0).contains(&result.score));
                    assert!((result.score - DEFAULT_WEIGHTS.combine(&result.breakdown)).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_invalid_range_fails_fast() {
        let mut j = job("1");
        j.experience = ExperienceRange { min: 10, max: 5 };
        let err = score_one(&candidate(), &j, &ScoringConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            MatchError::InvalidRange {
                field: "job.experience",
                ..
            }
        ));
    }

    #[test]
    fn test_custom_cutoffs_change_narrative() {
        let mut config = ScoringConfig::default();
        config.cutoffs.skills = Cutoffs::new(0.4, 0.1);
        let result = score_one(&candidate(), &job("1"), &config).unwrap();
        assert_eq!(result.strengths[0], "Strong match in React Native, TypeScript");
    }

    #[test]
    fn test_percent_rounds_to_nearest() {
        assert_eq!(percent(0.0), 0);
        assert_eq!(percent(1.0 / 3.0), 33);
        assert_eq!(percent(2.0 / 3.0), 67);
        assert_eq!(percent(0.125), 13);
    }
}
