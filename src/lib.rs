//! Weighted job-to-candidate match scoring.
//!
//! [`scoring::score_one`] scores one candidate against one posting across
//! skills, experience, salary, location and job type. [`scoring::rank_jobs`]
//! scores a batch, drops weak matches and returns the best ones in a stable
//! order. Everything else in the crate feeds those two functions: the data
//! model, a JSON-backed repository, YAML configuration and terminal output.

pub mod config;
pub mod error;
pub mod logging;
pub mod matching;
pub mod model;
pub mod output;
pub mod scoring;
pub mod store;

pub use error::MatchError;
pub use model::{CandidateProfile, ExperienceRange, JobPosting, JobType, SalaryRange};
pub use scoring::{rank_jobs, score_one, JobMatch, MatchResult, ScoringConfig};
