// File: crates/vesting-core/src/interval.rs
// Summary: Unlock interval menu and the fallback interval table used by the density guard.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

const SECOND: i64 = 1_000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Fixed menu of unlock intervals offered to the host form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnlockInterval {
    Second,
    Minute,
    Hour,
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl UnlockInterval {
    pub const ALL: [UnlockInterval; 9] = [
        UnlockInterval::Second,
        UnlockInterval::Minute,
        UnlockInterval::Hour,
        UnlockInterval::Daily,
        UnlockInterval::Weekly,
        UnlockInterval::Biweekly,
        UnlockInterval::Monthly,
        UnlockInterval::Quarterly,
        UnlockInterval::Yearly,
    ];

    /// Interval length in milliseconds. Months are 30 days, quarters 90, years 365.
    pub const fn as_millis(self) -> i64 {
        match self {
            UnlockInterval::Second => SECOND,
            UnlockInterval::Minute => MINUTE,
            UnlockInterval::Hour => HOUR,
            UnlockInterval::Daily => DAY,
            UnlockInterval::Weekly => 7 * DAY,
            UnlockInterval::Biweekly => 14 * DAY,
            UnlockInterval::Monthly => 30 * DAY,
            UnlockInterval::Quarterly => 90 * DAY,
            UnlockInterval::Yearly => 365 * DAY,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            UnlockInterval::Second => "Second",
            UnlockInterval::Minute => "Minute",
            UnlockInterval::Hour => "Hour",
            UnlockInterval::Daily => "Daily",
            UnlockInterval::Weekly => "Weekly",
            UnlockInterval::Biweekly => "Biweekly",
            UnlockInterval::Monthly => "Monthly",
            UnlockInterval::Quarterly => "Quarterly",
            UnlockInterval::Yearly => "Yearly",
        }
    }

    /// Menu entry whose length is exactly `ms`, if any.
    pub fn from_millis(ms: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.as_millis() == ms)
    }
}

impl fmt::Display for UnlockInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UnlockInterval {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|i| i.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ScheduleError::Config(format!("unknown unlock interval '{s}'")))
    }
}

/// One row of the fallback table: durations up to `max_duration_ms` use `interval_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalStep {
    pub max_duration_ms: i64,
    pub interval_ms: i64,
}

/// Ordered duration -> fallback interval mapping.
/// Rows are checked in order; `otherwise_ms` covers durations past the last row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalTable {
    pub steps: Vec<IntervalStep>,
    pub otherwise_ms: i64,
}

impl Default for IntervalTable {
    fn default() -> Self {
        Self {
            steps: vec![
                IntervalStep { max_duration_ms: MINUTE, interval_ms: SECOND },
                IntervalStep { max_duration_ms: HOUR, interval_ms: MINUTE },
                IntervalStep { max_duration_ms: 7 * DAY, interval_ms: HOUR },
                IntervalStep { max_duration_ms: 365 * DAY, interval_ms: 7 * DAY },
            ],
            // ~1 month (365 / 12 days)
            otherwise_ms: 2_628_000_000,
        }
    }
}

impl IntervalTable {
    /// Fallback interval for a schedule of `duration_ms`.
    pub fn lookup(&self, duration_ms: i64) -> i64 {
        self.steps
            .iter()
            .find(|step| duration_ms <= step.max_duration_ms)
            .map(|step| step.interval_ms)
            .unwrap_or(self.otherwise_ms)
    }

    /// Check that every interval is positive and the bounds are strictly ascending.
    pub fn validate(&self) -> ScheduleResult<()> {
        if self.otherwise_ms <= 0 {
            return Err(ScheduleError::Config(format!(
                "fallback interval must be > 0, got {}",
                self.otherwise_ms
            )));
        }
        let mut prev: Option<i64> = None;
        for step in &self.steps {
            if step.interval_ms <= 0 {
                return Err(ScheduleError::Config(format!(
                    "interval for durations <= {} ms must be > 0",
                    step.max_duration_ms
                )));
            }
            if let Some(p) = prev {
                if step.max_duration_ms <= p {
                    return Err(ScheduleError::Config(format!(
                        "duration bounds must be ascending ({} after {})",
                        step.max_duration_ms, p
                    )));
                }
            }
            prev = Some(step.max_duration_ms);
        }
        Ok(())
    }
}
