// File: crates/vesting-core/src/series.rs
// Summary: Series generator turning a schedule request into stepped cumulative unlock points.
// Notes:
// - Intermediate values follow a straight-line accrual toward the total (or 100%).
// - The last point is always pinned to the requested end time and the exact total.

use tracing::debug;

use crate::config::GeneratorOptions;
use crate::error::ScheduleResult;
use crate::types::{EpochMs, ScheduleRequest, TimePoint};

/// Percentage reached at the end of a schedule with no amount.
pub const FULL_PERCENT: f64 = 100.0;

/// How a series' values should be read.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueUnit {
    /// Absolute amount with the given total.
    Amount(f64),
    /// Percentage of the schedule, 0..=100.
    Percent,
}

impl ValueUnit {
    pub fn from_amount(amount: Option<f64>) -> Self {
        amount.map_or(ValueUnit::Percent, ValueUnit::Amount)
    }

    pub fn total(&self) -> f64 {
        match *self {
            ValueUnit::Amount(a) => a,
            ValueUnit::Percent => FULL_PERCENT,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            ValueUnit::Amount(_) => "",
            ValueUnit::Percent => "%",
        }
    }
}

/// Generated points together with the interval that actually produced them.
#[derive(Clone, Debug, PartialEq)]
pub struct VestingSeries {
    pub points: Vec<TimePoint>,
    pub unit: ValueUnit,
    /// Interval used for stepping; differs from the request when the density guard fired.
    pub effective_interval_ms: i64,
}

impl VestingSeries {
    pub fn generate(req: &ScheduleRequest, opts: &GeneratorOptions) -> ScheduleResult<Self> {
        req.validate()?;
        opts.validate()?;
        let effective_interval_ms = effective_interval(req.duration_ms(), req.interval_ms, opts);
        let points = build_points(req, effective_interval_ms);
        Ok(Self { points, unit: ValueUnit::from_amount(req.amount), effective_interval_ms })
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn last(&self) -> Option<&TimePoint> { self.points.last() }

    pub fn times(&self) -> Vec<EpochMs> {
        self.points.iter().map(|p| p.time).collect()
    }

    /// 0.0 when empty.
    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(0.0, f64::max)
    }
}

/// Generate the unlock series with default thresholds.
///
/// ```
/// use vesting_core::{generate_series, TimePoint};
///
/// let pts = generate_series(0, 10_000, 5_000, None).unwrap();
/// assert_eq!(pts, vec![
///     TimePoint::new(0, 0.0),
///     TimePoint::new(5_000, 50.0),
///     TimePoint::new(10_000, 100.0),
/// ]);
/// ```
pub fn generate_series(
    start_time: EpochMs,
    end_time: EpochMs,
    interval_ms: i64,
    amount: Option<f64>,
) -> ScheduleResult<Vec<TimePoint>> {
    generate_series_with(start_time, end_time, interval_ms, amount, &GeneratorOptions::default())
}

pub fn generate_series_with(
    start_time: EpochMs,
    end_time: EpochMs,
    interval_ms: i64,
    amount: Option<f64>,
    opts: &GeneratorOptions,
) -> ScheduleResult<Vec<TimePoint>> {
    let req = ScheduleRequest::try_new(start_time, end_time, interval_ms, amount)?;
    Ok(VestingSeries::generate(&req, opts)?.points)
}

/// Interval actually used for a schedule of `duration_ms` when the caller asked for `requested_ms`.
///
/// When `duration / requested > max_steps` the fallback table picks a coarser interval. If a custom
/// table still leaves too many steps, the interval is widened so the step count stays at `max_steps`.
pub fn effective_interval(duration_ms: i64, requested_ms: i64, opts: &GeneratorOptions) -> i64 {
    let max_steps = f64::from(opts.max_steps.max(1));
    if (duration_ms as f64) / (requested_ms as f64) <= max_steps {
        return requested_ms;
    }
    let mut interval = opts.fallback.lookup(duration_ms);
    if (duration_ms as f64) / (interval as f64) > max_steps {
        interval = (duration_ms as f64 / max_steps).ceil() as i64;
    }
    debug!(duration_ms, requested_ms, interval, "unlock interval too dense, using fallback");
    interval
}

fn build_points(req: &ScheduleRequest, interval_ms: i64) -> Vec<TimePoint> {
    let duration = req.duration_ms();
    let final_value = req.amount.unwrap_or(0.0);

    // Unlocks entirely at the end with no intermediate steps.
    if duration <= 0 || (duration as f64) / (req.interval_ms as f64) < 1.0 {
        return vec![TimePoint::new(req.end_time, final_value)];
    }

    let total = ValueUnit::from_amount(req.amount).total();
    let num = ((duration as f64) / (interval_ms as f64)).round() as i64;
    let mut points = Vec::with_capacity(num as usize + 1);
    for i in 0..=num {
        let time = req.start_time.saturating_add(i.saturating_mul(interval_ms));
        let value = if i == num {
            final_value
        } else {
            total * (time - req.start_time) as f64 / duration as f64
        };
        points.push(TimePoint::new(time, value));
    }

    if let Some(last) = points.last_mut() {
        last.time = req.end_time;
        if req.amount.is_none() {
            last.value = FULL_PERCENT;
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;
    use crate::interval::IntervalTable;
    use approx::assert_abs_diff_eq;

    #[test]
    fn two_steps_percent() {
        let pts = generate_series(0, 10_000, 5_000, None).unwrap();
        assert_eq!(
            pts,
            vec![TimePoint::new(0, 0.0), TimePoint::new(5_000, 50.0), TimePoint::new(10_000, 100.0)]
        );
    }

    #[test]
    fn interval_longer_than_range_collapses() {
        let pts = generate_series(0, 500, 5_000, None).unwrap();
        assert_eq!(pts, vec![TimePoint::new(500, 0.0)]);

        let pts = generate_series(0, 500, 5_000, Some(42.0)).unwrap();
        assert_eq!(pts, vec![TimePoint::new(500, 42.0)]);
    }

    #[test]
    fn zero_duration_collapses() {
        let pts = generate_series(1_000, 1_000, 1, Some(7.0)).unwrap();
        assert_eq!(pts, vec![TimePoint::new(1_000, 7.0)]);
    }

    #[test]
    fn amount_interpolates_linearly() {
        let pts = generate_series(0, 4_000, 1_000, Some(200.0)).unwrap();
        let values: Vec<f64> = pts.iter().map(|p| p.value).collect();
        assert_eq!(pts.len(), 5);
        for (got, want) in values.iter().zip([0.0, 50.0, 100.0, 150.0, 200.0]) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-9);
        }
    }

    #[test]
    fn rounding_overshoot_is_pinned_to_end() {
        // 10_500 / 1_000 rounds to 11 steps; the 11th lands at 11_000 before pinning.
        let pts = generate_series(0, 10_500, 1_000, None).unwrap();
        assert_eq!(pts.len(), 12);
        assert_eq!(*pts.last().unwrap(), TimePoint::new(10_500, 100.0));
        assert_eq!(pts[10].time, 10_000);

        // 10_400 / 1_000 rounds to 10 steps; the last stepped time undershoots.
        let pts = generate_series(0, 10_400, 1_000, Some(10.0)).unwrap();
        assert_eq!(pts.len(), 11);
        assert_eq!(*pts.last().unwrap(), TimePoint::new(10_400, 10.0));
    }

    #[test]
    fn zero_amount_stays_absolute() {
        let pts = generate_series(0, 3_000, 1_000, Some(0.0)).unwrap();
        assert!(pts.iter().all(|p| p.value == 0.0));
        assert_eq!(pts.last().unwrap().time, 3_000);
    }

    #[test]
    fn dense_request_uses_fallback() {
        let opts = GeneratorOptions::default();
        // one week at one-second steps -> hourly
        assert_eq!(effective_interval(604_800_000, 1_000, &opts), 3_600_000);
        // exactly at the cap keeps the caller's interval
        assert_eq!(effective_interval(2_800_000, 1_000, &opts), 1_000);
        assert_eq!(effective_interval(2_801_000, 1_000, &opts), 60_000);
    }

    #[test]
    fn custom_table_still_bounded() {
        let mut opts = GeneratorOptions::default();
        opts.max_steps = 10;
        let interval = effective_interval(1_000_000, 1, &opts);
        assert!(1_000_000 / interval <= 10);
        let pts = generate_series_with(0, 1_000_000, 1, None, &opts).unwrap();
        assert!(pts.len() <= 11);
        assert_eq!(*pts.last().unwrap(), TimePoint::new(1_000_000, 100.0));
    }

    #[test]
    fn vesting_series_reports_unit_and_interval() {
        let req = ScheduleRequest::try_new(0, 31_536_000_000, 1_000, Some(1_000_000.0)).unwrap();
        let s = VestingSeries::generate(&req, &GeneratorOptions::default()).unwrap();
        assert_eq!(s.unit, ValueUnit::Amount(1_000_000.0));
        assert_eq!(s.effective_interval_ms, 604_800_000);
        assert_eq!(s.len(), 53);
        assert_eq!(s.max_value(), 1_000_000.0);
        assert_eq!(s.last().copied(), Some(TimePoint::new(31_536_000_000, 1_000_000.0)));
    }

    #[test]
    fn bad_fallback_table_is_an_error() {
        let mut opts = GeneratorOptions::default();
        opts.fallback = IntervalTable { steps: vec![], otherwise_ms: -5 };
        assert!(matches!(
            generate_series_with(0, 10_000_000, 1, None, &opts),
            Err(ScheduleError::Config(_))
        ));

        let opts = GeneratorOptions { max_steps: u32::MAX, ..GeneratorOptions::default() };
        let req = ScheduleRequest::try_new(0, 3 * 31_536_000_000, 1, None).unwrap();
        assert!(matches!(VestingSeries::generate(&req, &opts), Err(ScheduleError::Config(_))));
    }

    #[test]
    fn extreme_range_is_rejected_not_overflowed() {
        assert!(matches!(
            generate_series(i64::MIN, i64::MAX, i64::MAX, None),
            Err(ScheduleError::InvalidRange { .. })
        ));
    }

    #[test]
    fn rejects_invalid_requests() {
        assert!(generate_series(10, 0, 1, None).is_err());
        assert!(generate_series(0, 10, 0, None).is_err());
        assert!(generate_series(0, 10, 1, Some(-5.0)).is_err());
    }
}
