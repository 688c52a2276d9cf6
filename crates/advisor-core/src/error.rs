use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdvisorError {
    #[error("Income must be positive, got {0}")]
    NonPositiveIncome(f64),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type AdvisorResult<T> = Result<T, AdvisorError>;
