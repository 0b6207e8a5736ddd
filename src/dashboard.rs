use serde::Serialize;

use crate::config::{DashboardConfig, LineConfig};
use crate::grid::{build_series, reading_points, y_axis_max};
use crate::models::{LineId, LineStatus, ProductionEntry, RawRow, TimeSeriesPoint};
use crate::normalize::normalize;
use crate::status::{entries_for_line, latest_status};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineReport {
    pub line: LineId,
    pub title: String,
    pub color: String,
    pub status: LineStatus,
    pub series: Vec<TimeSeriesPoint>,
    pub y_axis_max: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub lines: Vec<LineReport>,
}

impl Dashboard {
    pub fn line(&self, id: &LineId) -> Option<&LineReport> {
        self.lines.iter().find(|report| &report.line == id)
    }
}

/// Recomputes every configured line from the full upload.
pub fn build_dashboard(raw_rows: &[RawRow], config: &DashboardConfig) -> Dashboard {
    let entries = normalize(raw_rows);

    Dashboard {
        title: config.title.clone(),
        lines: config
            .lines
            .iter()
            .map(|line| build_line_report(&entries, line, config))
            .collect(),
    }
}

pub fn build_line_report(
    entries: &[ProductionEntry],
    line: &LineConfig,
    config: &DashboardConfig,
) -> LineReport {
    let line_entries = entries_for_line(entries, &line.id);
    let series = build_series(line_entries.iter().copied(), config.match_policy);

    LineReport {
        line: line.id.clone(),
        title: line.title.clone(),
        color: line.color.clone(),
        status: latest_status(entries, &line.id),
        y_axis_max: y_axis_max(&reading_points(line_entries)),
        series,
    }
}
