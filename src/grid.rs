use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{ProductionEntry, TimeSeriesPoint};
use crate::normalize::parse_time_of_day;

pub const FIRST_SLOT_HOUR: u32 = 6;
pub const LAST_SLOT_HOUR: u32 = 23;
pub const SLOT_COUNT: usize = ((LAST_SLOT_HOUR - FIRST_SLOT_HOUR + 1) * 2) as usize;
pub const MATCH_TOLERANCE_MS: i64 = 15 * 60 * 1000;

pub const AXIS_FLOOR: f64 = 150.0;
pub const AXIS_STEP: f64 = 50.0;

/// How a slot picks among the entries inside its tolerance window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// First entry in iteration order within tolerance, even if a later one is closer.
    #[default]
    FirstWithinTolerance,
    /// Entry with the smallest time delta; ties go to the earlier entry.
    Nearest,
}

/// Half-hour slots from 06:00 through 23:30.
pub fn time_grid() -> Vec<NaiveTime> {
    (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
        .flat_map(|hour| [0, 30].map(|minute| (hour, minute)))
        .filter_map(|(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0))
        .collect()
}

pub fn millis_from_midnight(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight()) * 1000 + i64::from(time.nanosecond() / 1_000_000)
}

/// Snaps entries onto the fixed grid. Slots with nothing inside the
/// tolerance window come back as `None`; entries are never consumed, so one
/// entry can fill two adjacent slots.
pub fn build_series<'a, I>(entries: I, policy: MatchPolicy) -> Vec<TimeSeriesPoint>
where
    I: IntoIterator<Item = &'a ProductionEntry>,
{
    let readings: Vec<(i64, f64)> = entries
        .into_iter()
        .filter_map(|entry| {
            parse_time_of_day(&entry.time)
                .map(|time| (millis_from_midnight(time), entry.parts_per_hour))
        })
        .collect();

    let series: Vec<TimeSeriesPoint> = time_grid()
        .into_iter()
        .map(|slot| {
            let slot_ms = millis_from_midnight(slot);
            TimeSeriesPoint {
                time: slot.format("%H:%M").to_string(),
                value: match_slot(&readings, slot_ms, policy),
            }
        })
        .collect();

    debug!(
        readings = readings.len(),
        filled = series.iter().filter(|point| point.value.is_some()).count(),
        ?policy,
        "built production series"
    );
    series
}

fn match_slot(readings: &[(i64, f64)], slot_ms: i64, policy: MatchPolicy) -> Option<f64> {
    let mut in_window = readings
        .iter()
        .map(|(at, value)| ((slot_ms - at).abs(), *value))
        .filter(|(delta, _)| *delta <= MATCH_TOLERANCE_MS);

    match policy {
        MatchPolicy::FirstWithinTolerance => in_window.next(),
        MatchPolicy::Nearest => in_window.min_by_key(|(delta, _)| *delta),
    }
    .map(|(_, value)| value)
}

/// The line's readings as recorded, before any snapping onto the grid.
pub fn reading_points<'a, I>(entries: I) -> Vec<TimeSeriesPoint>
where
    I: IntoIterator<Item = &'a ProductionEntry>,
{
    entries
        .into_iter()
        .map(|entry| TimeSeriesPoint {
            time: entry.time.clone(),
            value: Some(entry.parts_per_hour),
        })
        .collect()
}

/// Top of the rate axis: the largest value, never below 150, rounded up to
/// a multiple of 50. Fed with the raw readings so values hidden by snapping
/// or lying off the grid still raise the axis.
pub fn y_axis_max(points: &[TimeSeriesPoint]) -> i64 {
    let max = points
        .iter()
        .filter_map(|point| point.value)
        .fold(AXIS_FLOOR, f64::max);
    ((max / AXIS_STEP).ceil() * AXIS_STEP) as i64
}
