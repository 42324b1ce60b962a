pub mod config;
pub mod factors;
pub mod engine;
pub mod rank;
pub mod validation;

pub use config::*;
pub use engine::{percent, score_one, MatchResult};
pub use rank::{rank_jobs, relevant_matches, JobMatch};
pub use validation::validate_scoring;
