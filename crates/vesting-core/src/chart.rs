// File: crates/vesting-core/src/chart.rs
// Summary: Chart model bundling series, axis ticks and labels, plus CSV export for hosts.

use std::io;

use serde::Serialize;
use tracing::trace;

use crate::axis::{generate_axis_ticks, AxisTickSet};
use crate::config::GeneratorOptions;
use crate::error::{ScheduleError, ScheduleResult};
use crate::grid::{value_ticks, VALUE_TICK_COUNT};
use crate::labels::{format_tooltip, format_value_tick, unique_labels};
use crate::series::VestingSeries;
use crate::types::{EpochMs, ScheduleInput, ScheduleRequest, TimePoint};
use crate::view::ViewState;
use crate::zone::CalendarZone;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartOptions {
    pub generator: GeneratorOptions,
    pub zone: CalendarZone,
}

/// Everything a chart widget needs for one set of inputs.
///
/// Recreated from scratch whenever an input changes; nothing is updated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartModel {
    pub request: ScheduleRequest,
    pub series: VestingSeries,
    pub axis: AxisTickSet,
    /// One label per series point, dates shown once per day.
    pub point_labels: Vec<String>,
    pub view: ViewState,
    pub zone: CalendarZone,
}

#[derive(Serialize)]
struct PointRow<'a> {
    time: EpochMs,
    value: f64,
    label: &'a str,
}

#[derive(Serialize)]
struct TickRow {
    tick: EpochMs,
    label: String,
}

impl ChartModel {
    pub fn build(request: ScheduleRequest, opts: &ChartOptions) -> ScheduleResult<Self> {
        let series = VestingSeries::generate(&request, &opts.generator)?;
        let axis = generate_axis_ticks(request.start_time, request.end_time, &opts.zone)?;
        let point_labels = unique_labels(&series.times(), &opts.zone);
        let view = ViewState::from_series(&series, request.start_time, request.end_time);
        trace!(
            points = series.len(),
            ticks = axis.len(),
            interval_ms = series.effective_interval_ms,
            "built vesting chart model"
        );
        Ok(Self { request, series, axis, point_labels, view, zone: opts.zone })
    }

    /// Resolve the default end time, validate, and build.
    pub fn from_input(input: ScheduleInput, opts: &ChartOptions) -> ScheduleResult<Self> {
        Self::build(input.into_request()?, opts)
    }

    pub fn points(&self) -> &[TimePoint] { &self.series.points }

    pub fn axis_tick_label(&self, tick: EpochMs) -> String {
        self.axis.label(tick, &self.zone)
    }

    pub fn axis_tick_labels(&self) -> Vec<String> {
        self.axis.labels(&self.zone)
    }

    /// Tooltip lines for the point at `index`.
    pub fn tooltip(&self, index: usize) -> Option<(String, String)> {
        self.series
            .points
            .get(index)
            .map(|p| format_tooltip(p, &self.series.unit, &self.zone))
    }

    pub fn value_ticks(&self) -> Vec<f64> {
        value_ticks(self.view.y_min, self.view.y_max, VALUE_TICK_COUNT)
    }

    pub fn value_tick_label(&self, value: f64) -> String {
        format_value_tick(value, &self.series.unit)
    }

    /// Write `time,value,label` rows for every point.
    pub fn write_points_csv<W: io::Write>(&self, writer: W) -> ScheduleResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for (p, label) in self.series.points.iter().zip(&self.point_labels) {
            wtr.serialize(PointRow { time: p.time, value: p.value, label: label.as_str() })
                .map_err(export_err)?;
        }
        wtr.flush().map_err(|e| ScheduleError::Export(e.to_string()))
    }

    /// Write `tick,label` rows for every axis tick.
    pub fn write_axis_csv<W: io::Write>(&self, writer: W) -> ScheduleResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for &tick in self.axis.as_slice() {
            wtr.serialize(TickRow { tick, label: self.axis_tick_label(tick) })
                .map_err(export_err)?;
        }
        wtr.flush().map_err(|e| ScheduleError::Export(e.to_string()))
    }

    pub fn points_csv_string(&self) -> ScheduleResult<String> {
        let mut buf = Vec::new();
        self.write_points_csv(&mut buf)?;
        String::from_utf8(buf).map_err(|e| ScheduleError::Export(e.to_string()))
    }
}

fn export_err(e: csv::Error) -> ScheduleError {
    ScheduleError::Export(e.to_string())
}
