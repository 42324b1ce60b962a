use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::MatchError;
use crate::model::{CandidateProfile, JobPosting};

pub const STORE_VERSION: u32 = 1;

/// Read access to candidate profiles.
pub trait ProfileRepository {
    fn lookup_profile(&self, id: &str) -> Option<&CandidateProfile>;

    /// Insert or replace a profile. Rejects profiles that cannot be scored.
    fn save_profile(&mut self, profile: CandidateProfile) -> Result<(), MatchError>;
}

/// Read access to job postings.
pub trait JobRepository {
    fn lookup_jobs(&self) -> &[JobPosting];

    fn job_by_id(&self, id: &str) -> Option<&JobPosting> {
        self.lookup_jobs().iter().find(|job| job.id == id)
    }
}

/// In-memory jobs and profiles, serialized as the on-disk data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryStore {
    pub version: u32,
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
    #[serde(default)]
    pub profiles: BTreeMap<String, CandidateProfile>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a new empty store at the current version
    pub fn new() -> Self {
        Self {
            version: STORE_VERSION,
            jobs: Vec::new(),
            profiles: BTreeMap::new(),
        }
    }

    pub fn with_jobs(jobs: Vec<JobPosting>) -> Self {
        Self {
            jobs,
            ..Self::new()
        }
    }

    /// Check every record, returning the first invalid one.
    pub fn validate(&self) -> Result<(), MatchError> {
        self.jobs.iter().try_for_each(JobPosting::validate)?;
        self.profiles
            .values()
            .try_for_each(CandidateProfile::validate)
    }
}

impl ProfileRepository for MemoryStore {
    fn lookup_profile(&self, id: &str) -> Option<&CandidateProfile> {
        self.profiles.get(id)
    }

    fn save_profile(&mut self, profile: CandidateProfile) -> Result<(), MatchError> {
        profile.validate()?;
        tracing::debug!(profile = %profile.id, "saving profile");
        self.profiles.insert(profile.id.clone(), profile);
        Ok(())
    }
}

impl JobRepository for MemoryStore {
    fn lookup_jobs(&self) -> &[JobPosting] {
        &self.jobs
    }
}
