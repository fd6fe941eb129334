//! Error types for the calgrid core.

use thiserror::Error;

/// Errors that can occur at calgrid boundaries.
///
/// Evaluation itself is total; errors only arise at the storage and
/// input-parsing edges.
#[derive(Error, Debug)]
pub enum CalGridError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD or YYYY-MM-DDTHH:MM")]
    InvalidDate(String),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Invalid weekday '{0}'. Expected a name like 'mon' or 'sunday'")]
    InvalidWeekday(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calgrid operations.
pub type CalGridResult<T> = Result<T, CalGridError>;
