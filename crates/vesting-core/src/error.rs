// File: crates/vesting-core/src/error.rs
// Summary: Error taxonomy for schedule requests and generator configuration.

use thiserror::Error;

/// Result type for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Precondition failures on generator inputs. None of these carry a partial result;
/// the caller must supply a corrected request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("invalid range: end time {end} is before start time {start}")]
    InvalidRange { start: i64, end: i64 },

    #[error("invalid unlock interval: {interval_ms} ms (must be > 0)")]
    InvalidInterval { interval_ms: i64 },

    #[error("invalid amount: {amount} (must be finite and non-negative)")]
    InvalidAmount { amount: f64 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("export failed: {0}")]
    Export(String),
}
