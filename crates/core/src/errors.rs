use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeetError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to load schedule: {0}")]
    Load(#[from] eyre::Report),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type MeetResult<T> = Result<T, MeetError>;
