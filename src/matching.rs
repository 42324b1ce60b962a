use crate::error::MatchError;
use crate::model::CandidateProfile;
use crate::scoring::{relevant_matches, JobMatch, ScoringConfig};
use crate::store::{JobRepository, ProfileRepository};

/// Ranked matches for one profile plus the counts behind them.
#[derive(Debug, Clone)]
pub struct JobMatches<'a> {
    pub profile: &'a CandidateProfile,
    /// Matches above the relevance floor, before the limit was applied
    pub total_matches: usize,
    pub matches: Vec<JobMatch<'a>>,
}

impl JobMatches<'_> {
    pub fn average_score(&self) -> f64 {
        average_score(&self.matches)
    }
}

/// Rank every posting in the repository for the given profile.
///
/// The profile is resolved through the repository; the scorer itself never
/// looks anything up. Logs a summary of the run.
pub fn get_job_matches<'a, R>(
    repo: &'a R,
    profile_id: &str,
    limit: usize,
    scoring: &ScoringConfig,
) -> Result<JobMatches<'a>, MatchError>
where
    R: ProfileRepository + JobRepository,
{
    let profile = repo
        .lookup_profile(profile_id)
        .ok_or_else(|| MatchError::ProfileNotFound(profile_id.to_string()))?;

    let mut matches = relevant_matches(profile, repo.lookup_jobs(), scoring)?;
    let total_matches = matches.len();
    matches.truncate(limit);

    let report = JobMatches {
        profile,
        total_matches,
        matches,
    };

    tracing::info!(
        profile = profile_id,
        total_matches,
        returned = report.matches.len(),
        average_score = report.average_score(),
        "generated job matches"
    );

    Ok(report)
}

/// Mean score of the returned matches, 0 when there are none
pub fn average_score(matches: &[JobMatch]) -> f64 {
    if matches.is_empty() {
        return 0.0;
    }
    matches.iter().map(|m| m.result.score).sum::<f64>() / matches.len() as f64
}

/// Score a single posting for a profile, both looked up by id.
pub fn match_one<'a, R>(
    repo: &'a R,
    profile_id: &str,
    job_id: &str,
    scoring: &ScoringConfig,
) -> Result<JobMatch<'a>, MatchError>
where
    R: ProfileRepository + JobRepository,
{
    let profile = repo
        .lookup_profile(profile_id)
        .ok_or_else(|| MatchError::ProfileNotFound(profile_id.to_string()))?;
    let job = repo
        .job_by_id(job_id)
        .ok_or_else(|| MatchError::JobNotFound(job_id.to_string()))?;

    let result = crate::scoring::score_one(profile, job, scoring)?;
    Ok(JobMatch { job, result })
}
