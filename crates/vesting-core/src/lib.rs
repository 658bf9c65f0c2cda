// File: crates/vesting-core/src/lib.rs
// Summary: Core library entry point; exports series generation, axis ticks and label formatting.

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod grid;
pub mod interval;
pub mod labels;
pub mod series;
pub mod types;
pub mod view;
pub mod zone;

pub use axis::{format_axis_tick, generate_axis_ticks, AxisTickSet};
pub use chart::{ChartModel, ChartOptions};
pub use config::GeneratorOptions;
pub use error::{ScheduleError, ScheduleResult};
pub use interval::{IntervalStep, IntervalTable, UnlockInterval};
pub use labels::{format_tooltip, unique_labels};
pub use series::{generate_series, generate_series_with, ValueUnit, VestingSeries};
pub use types::{EpochMs, ScheduleInput, ScheduleRequest, TimePoint};
pub use view::ViewState;
pub use zone::CalendarZone;
