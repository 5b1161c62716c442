use thiserror::Error;
use uuid::Uuid;

/// Input that is well-formed JSON but outside the accepted domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("age must be between {min} and {max}, got {value}")]
    AgeOutOfRange { value: u32, min: u32, max: u32 },

    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("timelineWeeks must be between {min} and {max}, got {value}")]
    TimelineOutOfRange { value: u32, min: u32, max: u32 },
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile {0} not found")]
    NotFound(Uuid),

    #[error("invalid profile: {0}")]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
