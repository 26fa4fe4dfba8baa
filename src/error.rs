use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No diet plan generated yet")]
    PlanNotGenerated,

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
