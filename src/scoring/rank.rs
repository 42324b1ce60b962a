use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;

use super::config::ScoringConfig;
use super::engine::{score_validated, MatchResult};
use crate::error::MatchError;
use crate::model::{CandidateProfile, JobPosting};

/// A posting paired with its match result
#[derive(Debug, Clone, Serialize)]
pub struct JobMatch<'a> {
    pub job: &'a JobPosting,
    #[serde(flatten)]
    pub result: MatchResult,
}

/// Score every posting, drop those at or below the relevance floor, and return
/// the best `limit` matches.
///
/// Ordering is score descending, then job id ascending for ties, so the output
/// does not depend on input order or on how the work was split across threads.
pub fn rank_jobs<'a>(
    candidate: &CandidateProfile,
    jobs: &'a [JobPosting],
    limit: usize,
    config: &ScoringConfig,
) -> Result<Vec<JobMatch<'a>>, MatchError> {
    let mut matches = relevant_matches(candidate, jobs, config)?;
    matches.truncate(limit);
    Ok(matches)
}

/// Every match above the relevance floor, in ranked order, before any limit
/// is applied.
pub fn relevant_matches<'a>(
    candidate: &CandidateProfile,
    jobs: &'a [JobPosting],
    config: &ScoringConfig,
) -> Result<Vec<JobMatch<'a>>, MatchError> {
    candidate.validate()?;
    jobs.iter().try_for_each(JobPosting::validate)?;

    let mut matches: Vec<JobMatch<'a>> = jobs
        .par_iter()
        .map(|job| JobMatch {
            job,
            result: score_validated(candidate, job, config),
        })
        .filter(|m| m.result.score > config.relevance_floor)
        .collect();

    matches.sort_by(compare_matches);

    tracing::debug!(
        candidate = %candidate.id,
        scored = jobs.len(),
        relevant = matches.len(),
        "ranked postings"
    );

    Ok(matches)
}

fn compare_matches(a: &JobMatch, b: &JobMatch) -> Ordering {
    b.result
        .score
        .partial_cmp(&a.result.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.job.id.cmp(&b.job.id))
}
