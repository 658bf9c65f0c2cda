// File: crates/vesting-demo/src/main.rs
// Summary: Demo builds a vesting schedule from CLI inputs and writes points/axis CSVs.
//
// Usage:
//   vesting-demo <start> [end] [--interval NAME|MS] [--amount N] [--zone utc|local|+HH:MM]
//                [--config options.toml] [--out DIR]
// <start>/<end> accept epoch milliseconds or RFC 3339 timestamps.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::DateTime;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vesting_core::{
    CalendarZone, ChartModel, ChartOptions, GeneratorOptions, ScheduleInput, UnlockInterval,
};

struct Args {
    start: i64,
    end: Option<i64>,
    interval: UnlockInterval,
    amount: Option<u64>,
    zone: CalendarZone,
    config: Option<PathBuf>,
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vesting_core=debug,vesting_demo=info")),
        )
        .with_target(true)
        .init();

    let args = parse_args(std::env::args().skip(1))?;

    let generator = match &args.config {
        Some(path) => GeneratorOptions::from_file(path)
            .with_context(|| format!("failed to load options from '{}'", path.display()))?,
        None => GeneratorOptions::default(),
    };
    let opts = ChartOptions { generator, zone: args.zone };

    let input = ScheduleInput {
        start_time: args.start,
        end_time: args.end,
        interval_ms: args.interval.as_millis(),
        amount: args.amount,
    };
    let model = ChartModel::from_input(input, &opts).context("invalid schedule")?;
    info!(
        points = model.points().len(),
        ticks = model.axis.len(),
        effective_interval_ms = model.series.effective_interval_ms,
        zone = %model.zone,
        "chart model ready"
    );

    println!("Schedule: {} -> {} ({} unlocks)", model.request.start_time, model.request.end_time, args.interval);
    if model.series.effective_interval_ms != args.interval.as_millis() {
        println!("  (interval too dense, stepped every {} ms instead)", model.series.effective_interval_ms);
    }
    for (p, label) in model.points().iter().zip(&model.point_labels).take(10) {
        println!("  {:>20}  {:>14}", label, model.value_tick_label((p.value * 100.0).round() / 100.0));
    }
    if model.points().len() > 10 {
        println!("  ... {} more points", model.points().len() - 10);
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    let points_path = out_name_with(&args.out_dir, &args, "points");
    let axis_path = out_name_with(&args.out_dir, &args, "axis");

    let file = File::create(&points_path).with_context(|| format!("creating {}", points_path.display()))?;
    model.write_points_csv(file)?;
    println!("Wrote {}", points_path.display());

    let file = File::create(&axis_path).with_context(|| format!("creating {}", axis_path.display()))?;
    model.write_axis_csv(file)?;
    println!("Wrote {}", axis_path.display());

    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut positional = Vec::new();
    let mut interval = UnlockInterval::Second;
    let mut amount = None;
    let mut zone = CalendarZone::default();
    let mut config = None;
    let mut out_dir = PathBuf::from("target/out");

    while let Some(arg) = it.next() {
        let mut value = |flag: &str| {
            it.next().with_context(|| format!("{flag} expects a value"))
        };
        match arg.as_str() {
            "--interval" => interval = parse_interval(&value("--interval")?)?,
            "--amount" => {
                let raw = value("--amount")?;
                amount = Some(raw.parse::<u64>().with_context(|| format!("amount '{raw}' is not a non-negative integer"))?);
            }
            "--zone" => zone = value("--zone")?.parse()?,
            "--config" => config = Some(PathBuf::from(value("--config")?)),
            "--out" => out_dir = PathBuf::from(value("--out")?),
            flag if flag.starts_with("--") => anyhow::bail!("unknown flag {flag}"),
            other => positional.push(other.to_string()),
        }
    }

    let mut positional = positional.into_iter();
    let start = match positional.next() {
        Some(s) => parse_time(&s)?,
        None => anyhow::bail!("usage: vesting-demo <start> [end] [--interval NAME] [--amount N] [--zone Z] [--config PATH] [--out DIR]"),
    };
    let end = positional.next().map(|s| parse_time(&s)).transpose()?;
    if let Some(extra) = positional.next() {
        anyhow::bail!("unexpected argument '{extra}'");
    }

    Ok(Args { start, end, interval, amount, zone, config, out_dir })
}

/// Menu label (`weekly`) or the exact millisecond length of a menu entry (`604800000`).
fn parse_interval(s: &str) -> Result<UnlockInterval> {
    match s.trim().parse::<i64>() {
        Ok(ms) => UnlockInterval::from_millis(ms)
            .with_context(|| format!("{ms} ms is not one of the unlock intervals")),
        Err(_) => Ok(s.parse()?),
    }
}

/// Epoch milliseconds, or an RFC 3339 timestamp.
fn parse_time(s: &str) -> Result<i64> {
    let s = s.trim();
    if let Ok(ms) = s.parse::<i64>() {
        return Ok(ms);
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.timestamp_millis())
        .with_context(|| format!("'{s}' is neither epoch milliseconds nor RFC 3339"))
}

/// Produce output file name like <dir>/vesting_<start>_<interval>_<suffix>.csv
fn out_name_with(dir: &Path, args: &Args, suffix: &str) -> PathBuf {
    dir.join(format!(
        "vesting_{}_{}_{}.csv",
        args.start,
        args.interval.label().to_lowercase(),
        suffix
    ))
}
