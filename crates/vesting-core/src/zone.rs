// File: crates/vesting-core/src/zone.rs
// Summary: Calendar time zone used for hour checks, midnights, date keys and label text.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, TimeZone, Timelike, Utc};

use crate::error::ScheduleError;
use crate::types::EpochMs;

/// Zone in which calendar days and hours are evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CalendarZone {
    Utc,
    /// Host local time, as a browser would use.
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl CalendarZone {
    /// Convert an epoch-ms instant into this zone. `None` when outside chrono's range.
    pub fn datetime(&self, ms: EpochMs) -> Option<DateTime<FixedOffset>> {
        let utc = DateTime::<Utc>::from_timestamp_millis(ms)?;
        Some(match self {
            CalendarZone::Utc => utc.fixed_offset(),
            CalendarZone::Local => utc.with_timezone(&Local).fixed_offset(),
            CalendarZone::Fixed(offset) => utc.with_timezone(offset),
        })
    }

    pub fn hour(&self, ms: EpochMs) -> Option<u32> {
        self.datetime(ms).map(|dt| dt.hour())
    }

    pub fn date(&self, ms: EpochMs) -> Option<NaiveDate> {
        self.datetime(ms).map(|dt| dt.date_naive())
    }

    pub fn day_of_month(&self, ms: EpochMs) -> Option<u32> {
        self.datetime(ms).map(|dt| dt.day())
    }

    /// 00:00 of the calendar day after the one containing `ms`.
    /// `None` if that midnight does not exist locally (DST gap) or is out of range.
    /// Only `Local` can hit a DST gap; `Utc` and `Fixed` always have a midnight.
    pub fn next_midnight(&self, ms: EpochMs) -> Option<EpochMs> {
        let next_day = self.date(ms)?.succ_opt()?;
        let naive = next_day.and_hms_opt(0, 0, 0)?;
        let instant = match self {
            CalendarZone::Utc => Utc.from_local_datetime(&naive).earliest()?.timestamp_millis(),
            CalendarZone::Local => Local.from_local_datetime(&naive).earliest()?.timestamp_millis(),
            CalendarZone::Fixed(offset) => {
                offset.from_local_datetime(&naive).earliest()?.timestamp_millis()
            }
        };
        Some(instant)
    }

    pub fn format(&self, ms: EpochMs, pattern: &str) -> Option<String> {
        self.datetime(ms).map(|dt| dt.format(pattern).to_string())
    }
}

impl fmt::Display for CalendarZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarZone::Utc => f.write_str("utc"),
            CalendarZone::Local => f.write_str("local"),
            CalendarZone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

/// Accepts `utc`, `local`, or an offset such as `+05:30` / `-08:00`.
impl FromStr for CalendarZone {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("utc") || s == "Z" {
            return Ok(CalendarZone::Utc);
        }
        if s.eq_ignore_ascii_case("local") {
            return Ok(CalendarZone::Local);
        }
        s.parse::<FixedOffset>()
            .map(CalendarZone::Fixed)
            .map_err(|e| ScheduleError::Config(format!("invalid time zone '{s}': {e}")))
    }
}
