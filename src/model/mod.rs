pub mod types;

pub use types::{CandidateProfile, ExperienceRange, JobPosting, JobType, SalaryRange};
