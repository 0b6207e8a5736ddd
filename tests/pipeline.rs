use std::path::PathBuf;

use flock_line_report::ingest::load_rows;
use flock_line_report::{build_dashboard, DashboardConfig, LineId, MatchPolicy};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn value_at(series: &[flock_line_report::TimeSeriesPoint], label: &str) -> Option<f64> {
    series
        .iter()
        .find(|point| point.time == label)
        .and_then(|point| point.value)
}

#[test]
fn shift_log_produces_status_and_series_per_line() {
    let rows = load_rows(&fixture_path("shift_log.csv"), None).expect("failed to read fixture");
    assert_eq!(rows.len(), 7);

    let dashboard = build_dashboard(&rows, &DashboardConfig::default());

    let one = dashboard.line(&LineId::new("1")).expect("line 1 missing");
    let status = one.status.display();
    assert_eq!(status.part_number, "P1");
    assert_eq!(status.part_name, "Widget");
    // the row without a line id is dropped, so 10 is the latest quantity
    assert_eq!(status.total_quantity, "10");
    assert_eq!(status.parts_per_hour, "43");
    assert_eq!(one.series.len(), 36);
    assert_eq!(value_at(&one.series, "06:00"), Some(38.2));
    assert_eq!(value_at(&one.series, "08:00"), Some(42.3));
    assert_eq!(value_at(&one.series, "08:30"), None);
    assert_eq!(one.y_axis_max, 150);

    let two = dashboard.line(&LineId::new("2")).expect("line 2 missing");
    let status = two.status.display();
    assert_eq!(status.part_number, "Q8");
    assert_eq!(status.part_name, "Hinge");
    assert_eq!(status.total_quantity, "0");
    assert_eq!(status.parts_per_hour, "213");
    assert_eq!(value_at(&two.series, "06:00"), None);
    assert_eq!(value_at(&two.series, "06:30"), Some(20.0));
    assert_eq!(value_at(&two.series, "09:00"), Some(10.0));
    assert_eq!(value_at(&two.series, "09:30"), None);
    assert_eq!(value_at(&two.series, "13:30"), Some(212.4));
    assert_eq!(two.y_axis_max, 250);
}

#[test]
fn nearest_policy_agrees_on_time_ordered_log() {
    let rows = load_rows(&fixture_path("shift_log.csv"), None).expect("failed to read fixture");
    let config = DashboardConfig {
        match_policy: MatchPolicy::Nearest,
        ..DashboardConfig::default()
    };
    let first = build_dashboard(&rows, &DashboardConfig::default());
    let nearest = build_dashboard(&rows, &config);

    let line = LineId::new("2");
    let first_series = &first.line(&line).unwrap().series;
    let nearest_series = &nearest.line(&line).unwrap().series;
    assert_eq!(value_at(nearest_series, "09:00"), Some(10.0));
    assert_eq!(first_series, nearest_series);
}

#[test]
fn chart_payload_serializes_gaps_as_null() {
    let rows = load_rows(&fixture_path("shift_log.csv"), None).expect("failed to read fixture");
    let dashboard = build_dashboard(&rows, &DashboardConfig::default());
    let json = serde_json::to_value(&dashboard).expect("serialize failed");

    let first_line = &json["lines"][0];
    assert_eq!(first_line["line"], "1");
    assert_eq!(first_line["yAxisMax"], 150);
    assert_eq!(first_line["series"][1]["time"], "06:30");
    assert!(first_line["series"][1]["value"].is_null());
    assert_eq!(first_line["status"]["partsPerHour"], 43);
}
