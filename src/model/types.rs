use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::MatchError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive salary range in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u64,
    pub max: u64,
}

impl SalaryRange {
    pub fn midpoint(&self) -> f64 {
        (self.min as f64 + self.max as f64) / 2.0
    }

    pub fn overlaps(&self, other: &SalaryRange) -> bool {
        self.max >= other.min && self.min <= other.max
    }

    fn check(&self, field: &'static str) -> Result<(), MatchError> {
        check_range(field, self.min, self.max)
    }
}

/// Inclusive range of years of experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRange {
    pub min: u32,
    pub max: u32,
}

impl ExperienceRange {
    pub fn contains(&self, years: u32) -> bool {
        years >= self.min && years <= self.max
    }

    pub fn overlaps(&self, other: &ExperienceRange) -> bool {
        self.max >= other.min && self.min <= other.max
    }

    fn check(&self, field: &'static str) -> Result<(), MatchError> {
        check_range(field, self.min as u64, self.max as u64)
    }
}

fn check_range(field: &'static str, min: u64, max: u64) -> Result<(), MatchError> {
    if min > max {
        Err(MatchError::InvalidRange { field, min, max })
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub desired_salary: SalaryRange,
    #[serde(default)]
    pub desired_locations: Vec<String>,
    #[serde(default)]
    pub job_types: BTreeSet<JobType>,
    #[serde(default)]
    pub remote_acceptable: bool,
}

impl CandidateProfile {
    /// Reject profiles whose ranges cannot be scored.
    pub fn validate(&self) -> Result<(), MatchError> {
        self.desired_salary.check("candidate.desired_salary")
    }

    /// Display name, falling back to the id for unnamed profiles
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: SalaryRange,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub experience: ExperienceRange,
    pub job_type: JobType,
    #[serde(default)]
    pub remote: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub posted_date: Option<NaiveDate>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl JobPosting {
    /// Reject postings whose ranges cannot be scored.
    pub fn validate(&self) -> Result<(), MatchError> {
        self.salary.check("job.salary")?;
        self.experience.check("job.experience")
    }

    /// Days since the posting went up, None when the date is unknown
    pub fn age(&self) -> Option<chrono::Duration> {
        self.posted_date
            .map(|date| Utc::now().date_naive().signed_duration_since(date))
    }

    /// Return a short reference in the format "company#id"
    pub fn short_ref(&self) -> String {
        format!("{}#{}", self.company, self.id)
    }
}
