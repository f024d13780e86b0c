use crate::db::repository::RepoError;
use crate::utils::AppError;
use thiserror::Error;

/// Booking lifecycle errors
///
/// Every validation failure is reported synchronously with a specific kind;
/// nothing is retried here and nothing is swallowed.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),

    #[error("Room unavailable: {0}")]
    RoomUnavailable(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Illegal transition: {0}")]
    IllegalTransition(String),

    #[error("Too early: {0}")]
    TooEarly(String),

    #[error("Illegal operation: {0}")]
    IllegalOperation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<RepoError> for BookingError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => BookingError::NotFound(msg),
            RepoError::Validation(msg) => BookingError::Validation(msg),
            // 事务守卫 THROW：并发状态变更
            RepoError::Conflict(msg) => BookingError::IllegalTransition(msg),
            RepoError::Duplicate(msg) => BookingError::Database(msg),
            RepoError::Database(msg) => BookingError::Database(msg),
        }
    }
}

/// HTTP mapping for the API layer
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Validation(msg) => AppError::Validation(msg),
            BookingError::CapacityExceeded(msg) => AppError::BusinessRule(msg),
            BookingError::RoomUnavailable(msg) => AppError::Conflict(msg),
            BookingError::NotFound(msg) => AppError::NotFound(msg),
            BookingError::IllegalTransition(msg) => AppError::BusinessRule(msg),
            BookingError::TooEarly(msg) => AppError::BusinessRule(msg),
            BookingError::IllegalOperation(msg) => AppError::BusinessRule(msg),
            BookingError::Database(msg) => AppError::Database(msg),
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
