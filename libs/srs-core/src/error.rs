//! Error types for srs-core.

use thiserror::Error;

/// Result type alias using StateError.
pub type Result<T> = std::result::Result<T, StateError>;

/// Errors raised when validating records at the storage boundary.
///
/// Scheduling and classification never fail; these only guard values coming
/// in from outside before they reach the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StateError {
    #[error("quality must be between 0 and 5, got {0}")]
    InvalidQuality(u8),

    #[error("ease factor {0} is not a finite number")]
    NonFiniteEase(f64),

    #[error("ease factor {0} is below the minimum of 1.3")]
    EaseBelowFloor(f64),

    #[error("reviewed card has a zero interval")]
    ZeroIntervalAfterReview,

    #[error("daily reset hour must be between 0 and 23, got {0}")]
    InvalidResetHour(u32),
}
