// File: crates/vesting-core/src/grid.rs
// Summary: Value-axis tick layout helpers.

/// Number of ticks drawn on the value axis.
pub const VALUE_TICK_COUNT: usize = 7;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Evenly spaced value ticks over `[min, max]`, endpoints included exactly.
pub fn value_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    let mut ticks = linspace(min, max, count);
    if let Some(last) = ticks.last_mut() { *last = max; }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_axis_has_seven_ticks() {
        let t = value_ticks(0.0, 100.0, VALUE_TICK_COUNT);
        assert_eq!(t.len(), 7);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[6], 100.0);
        assert!((t[3] - 50.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_step_count() {
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0, 1.0]);
    }
}
