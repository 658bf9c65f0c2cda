// File: crates/vesting-core/src/view.rs
// Visible ranges for a vesting chart: the time span on X and the value domain on Y.

use crate::series::{ValueUnit, VestingSeries};
use crate::types::EpochMs;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// X spans the requested schedule; Y runs from 0 to 100 for percentages, or to the larger of
    /// the amount and the series maximum.
    pub fn from_series(series: &VestingSeries, start: EpochMs, end: EpochMs) -> Self {
        let x_min = start as f64;
        let mut x_max = end as f64;
        let y_min = 0.0;
        let mut y_max = match series.unit {
            ValueUnit::Percent => 100.0,
            ValueUnit::Amount(a) => series.max_value().max(a),
        };
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        Self { x_min, x_max, y_min, y_max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorOptions;
    use crate::types::ScheduleRequest;

    fn series(amount: Option<f64>, end: i64) -> VestingSeries {
        let req = ScheduleRequest::try_new(0, end, 1_000, amount).unwrap();
        VestingSeries::generate(&req, &GeneratorOptions::default()).unwrap()
    }

    #[test]
    fn percent_domain_is_fixed() {
        let v = ViewState::from_series(&series(None, 5_000), 0, 5_000);
        assert_eq!((v.y_min, v.y_max), (0.0, 100.0));
        assert_eq!((v.x_min, v.x_max), (0.0, 5_000.0));
    }

    #[test]
    fn amount_domain_reaches_amount() {
        let v = ViewState::from_series(&series(Some(250.0), 5_000), 0, 5_000);
        assert_eq!(v.y_max, 250.0);
    }

    #[test]
    fn zero_spans_are_widened() {
        let v = ViewState::from_series(&series(Some(0.0), 0), 0, 0);
        assert_eq!(v.x_max, 1.0);
        assert_eq!(v.y_max, 1.0);
    }
}
