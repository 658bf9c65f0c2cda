// File: crates/vesting-core/src/axis.rs
// Summary: Time axis tick positions (6-hour steps plus day boundaries) and their labels.

use crate::error::{ScheduleError, ScheduleResult};
use crate::types::{EpochMs, MS_PER_HOUR};
use crate::zone::CalendarZone;

/// Distance between regular axis ticks.
pub const AXIS_STEP_MS: i64 = 6 * MS_PER_HOUR;
/// Local hour that marks the end of a day on the axis.
pub const END_OF_DAY_HOUR: u32 = 18;

/// Ordered, distinct tick positions spanning `[start, end]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisTickSet {
    pub start: EpochMs,
    pub end: EpochMs,
    pub ticks: Vec<EpochMs>,
}

impl AxisTickSet {
    pub fn len(&self) -> usize { self.ticks.len() }

    pub fn is_empty(&self) -> bool { self.ticks.is_empty() }

    pub fn first(&self) -> Option<EpochMs> { self.ticks.first().copied() }

    pub fn last(&self) -> Option<EpochMs> { self.ticks.last().copied() }

    pub fn as_slice(&self) -> &[EpochMs] { &self.ticks }

    pub fn label(&self, tick: EpochMs, zone: &CalendarZone) -> String {
        format_axis_tick(tick, &self.ticks, zone)
    }

    pub fn labels(&self, zone: &CalendarZone) -> Vec<String> {
        self.ticks.iter().map(|&t| self.label(t, zone)).collect()
    }
}

/// Build axis ticks from `start` to `end`.
///
/// Emits `start` and every 6 hours after it while the instant is `<= end`. When an emitted
/// instant falls in local hour 18, the following local midnight is emitted too so every day
/// boundary gets a tick. Midnights past `end` and positions already emitted are skipped.
pub fn generate_axis_ticks(
    start: EpochMs,
    end: EpochMs,
    zone: &CalendarZone,
) -> ScheduleResult<AxisTickSet> {
    if end < start {
        return Err(ScheduleError::InvalidRange { start, end });
    }

    fn push(t: EpochMs, ticks: &mut Vec<EpochMs>) {
        if ticks.last().map_or(true, |&last| t > last) {
            ticks.push(t);
        }
    }

    let mut ticks: Vec<EpochMs> = Vec::new();

    let mut current = start;
    while current <= end {
        push(current, &mut ticks);
        if zone.hour(current) == Some(END_OF_DAY_HOUR) {
            if let Some(midnight) = zone.next_midnight(current).filter(|&m| m <= end) {
                push(midnight, &mut ticks);
            }
        }
        current = match current.checked_add(AXIS_STEP_MS) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(AxisTickSet { start, end, ticks })
}

/// Axis label for `tick`: the day of month for the first tick, the last tick and ticks in
/// hour 18; `HH:00` otherwise.
pub fn format_axis_tick(tick: EpochMs, ticks: &[EpochMs], zone: &CalendarZone) -> String {
    let Some(dt) = zone.datetime(tick) else {
        return tick.to_string();
    };
    let is_first = ticks.first() == Some(&tick);
    let is_last = ticks.last() == Some(&tick);
    if is_first || is_last || zone.hour(tick) == Some(END_OF_DAY_HOUR) {
        dt.format("%-d").to_string()
    } else {
        dt.format("%H:00").to_string()
    }
}
