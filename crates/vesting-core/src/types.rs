// File: crates/vesting-core/src/types.rs
// Summary: Shared types and constants (time points, schedule requests, spans).

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

/// Epoch milliseconds.
pub type EpochMs = i64;

pub const MS_PER_HOUR: i64 = 3_600_000;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
/// Span used when the caller gives no end time (5 days).
pub const DEFAULT_SCHEDULE_SPAN_MS: i64 = 5 * MS_PER_DAY;

/// One sample of cumulative unlock progress.
///
/// `value` is an absolute amount when the schedule has one, otherwise a percentage in [0, 100].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub time: EpochMs,
    pub value: f64,
}

impl TimePoint {
    pub const fn new(time: EpochMs, value: f64) -> Self {
        Self { time, value }
    }
}

/// Fully resolved generator input.
/// Contract: `end_time >= start_time`, `interval_ms > 0`, `amount` finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduleRequest {
    pub start_time: EpochMs,
    pub end_time: EpochMs,
    pub interval_ms: i64,
    pub amount: Option<f64>,
}

impl ScheduleRequest {
    pub fn try_new(
        start_time: EpochMs,
        end_time: EpochMs,
        interval_ms: i64,
        amount: Option<f64>,
    ) -> ScheduleResult<Self> {
        let req = Self { start_time, end_time, interval_ms, amount };
        req.validate()?;
        Ok(req)
    }

    pub fn validate(&self) -> ScheduleResult<()> {
        if self.interval_ms <= 0 {
            return Err(ScheduleError::InvalidInterval { interval_ms: self.interval_ms });
        }
        if self.end_time < self.start_time || self.end_time.checked_sub(self.start_time).is_none() {
            return Err(ScheduleError::InvalidRange { start: self.start_time, end: self.end_time });
        }
        if let Some(amount) = self.amount {
            if !amount.is_finite() || amount < 0.0 {
                return Err(ScheduleError::InvalidAmount { amount });
            }
        }
        Ok(())
    }

    /// Saturates on ranges `validate` would reject.
    pub const fn duration_ms(&self) -> i64 {
        self.end_time.saturating_sub(self.start_time)
    }
}

/// Raw host input, before the default end time is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduleInput {
    pub start_time: EpochMs,
    pub end_time: Option<EpochMs>,
    pub interval_ms: i64,
    pub amount: Option<u64>,
}

impl ScheduleInput {
    /// End time actually used: the given one, or start + 5 days.
    pub fn resolved_end(&self) -> EpochMs {
        self.end_time
            .unwrap_or_else(|| self.start_time.saturating_add(DEFAULT_SCHEDULE_SPAN_MS))
    }

    pub fn into_request(self) -> ScheduleResult<ScheduleRequest> {
        ScheduleRequest::try_new(
            self.start_time,
            self.resolved_end(),
            self.interval_ms,
            self.amount.map(|a| a as f64),
        )
    }
}
