use thiserror::Error;

/// Domain errors raised by the scorer and the match service.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    #[error("invalid range for {field}: min {min} is greater than max {max}")]
    InvalidRange {
        field: &'static str,
        min: u64,
        max: u64,
    },

    #[error("profile not found: {0}")]
    ProfileNotFound(String),

    #[error("job not found: {0}")]
    JobNotFound(String),
}
