// File: crates/vesting-core/src/labels.rs
// Summary: Point labels without repeated dates, tooltip text and value-axis labels.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::series::ValueUnit;
use crate::types::{EpochMs, TimePoint};
use crate::zone::CalendarZone;

const FMT_DATE_TIME: &str = "%-d %b %Y, %H:%M";
const FMT_TIME: &str = "%H:%M";
const FMT_TOOLTIP_DATE: &str = "%B %-d, %Y, %I:%M %p";

pub fn format_date_time(ms: EpochMs, zone: &CalendarZone) -> String {
    zone.format(ms, FMT_DATE_TIME).unwrap_or_else(|| ms.to_string())
}

pub fn format_time(ms: EpochMs, zone: &CalendarZone) -> String {
    zone.format(ms, FMT_TIME).unwrap_or_else(|| ms.to_string())
}

/// Label every timestamp, giving the full date only to the first one on each calendar day.
///
/// Output has the same length and order as the input. Days are compared in `zone`.
pub fn unique_labels(timestamps: &[EpochMs], zone: &CalendarZone) -> Vec<String> {
    let mut seen: HashSet<NaiveDate> = HashSet::new();
    timestamps
        .iter()
        .map(|&ms| match zone.date(ms) {
            Some(date) if seen.insert(date) => format_date_time(ms, zone),
            Some(_) => format_time(ms, zone),
            None => ms.to_string(),
        })
        .collect()
}

/// Two-line tooltip for one point: long date, then the value with two decimals.
pub fn format_tooltip(point: &TimePoint, unit: &ValueUnit, zone: &CalendarZone) -> (String, String) {
    let date = zone
        .format(point.time, FMT_TOOLTIP_DATE)
        .unwrap_or_else(|| point.time.to_string());
    (date, format!("{:.2}{}", point.value, unit.suffix()))
}

pub fn format_value_tick(value: f64, unit: &ValueUnit) -> String {
    format!("{}{}", value, unit.suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: i64 = 3_600_000;
    // 2024-03-01T00:00:00Z
    const MAR1: i64 = 1_709_251_200_000;

    #[test]
    fn same_day_repeats_time_only() {
        let zone = CalendarZone::Utc;
        let labels = unique_labels(&[MAR1 + 9 * H, MAR1 + 15 * H + 30 * 60_000], &zone);
        assert_eq!(labels, vec!["1 Mar 2024, 09:00", "15:30"]);
    }

    #[test]
    fn different_days_get_full_labels() {
        let zone = CalendarZone::Utc;
        let labels = unique_labels(&[MAR1 + 23 * H, MAR1 + 25 * H, MAR1 + 26 * H], &zone);
        assert_eq!(labels, vec!["1 Mar 2024, 23:00", "2 Mar 2024, 01:00", "02:00"]);
    }

    #[test]
    fn zone_decides_the_calendar_day() {
        // 23:00Z and 01:00Z next day share a calendar day at -05:00
        let zone: CalendarZone = "-05:00".parse().unwrap();
        let labels = unique_labels(&[MAR1 + 23 * H, MAR1 + 25 * H], &zone);
        assert_eq!(labels, vec!["1 Mar 2024, 18:00", "20:00"]);
    }

    #[test]
    fn empty_input() {
        assert!(unique_labels(&[], &CalendarZone::Utc).is_empty());
    }

    #[test]
    fn tooltip_and_value_ticks() {
        let zone = CalendarZone::Utc;
        let p = TimePoint::new(MAR1 + 15 * H + 5 * 60_000, 33.333_333);
        let (date, value) = format_tooltip(&p, &ValueUnit::Percent, &zone);
        assert_eq!(date, "March 1, 2024, 03:05 PM");
        assert_eq!(value, "33.33%");
        let (_, value) = format_tooltip(&p, &ValueUnit::Amount(100.0), &zone);
        assert_eq!(value, "33.33");

        assert_eq!(format_value_tick(50.0, &ValueUnit::Percent), "50%");
        assert_eq!(format_value_tick(12.5, &ValueUnit::Amount(100.0)), "12.5");
    }
}
