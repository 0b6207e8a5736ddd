use std::fmt::Write;

use crate::dashboard::{Dashboard, LineReport};

const NO_DATA: &str = "No Data";

pub fn format_rate(value: Option<f64>) -> String {
    match value {
        Some(rate) => format!("{rate}"),
        None => NO_DATA.to_string(),
    }
}

pub fn build_report(dashboard: &Dashboard, source: &str) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# {}", dashboard.title);
    let _ = writeln!(output, "Generated from {source}");

    for line in &dashboard.lines {
        let _ = writeln!(output);
        write_line_section(&mut output, line);
    }

    output
}

fn write_line_section(output: &mut String, line: &LineReport) {
    let status = line.status.display();

    let _ = writeln!(output, "## Current Part Line {}", line.line);
    let _ = writeln!(output, "- Part Number: {}", status.part_number);
    let _ = writeln!(output, "- Part Name: {}", status.part_name);
    let _ = writeln!(output, "- Total Quantity / Shift: {}", status.total_quantity);
    let _ = writeln!(output, "- Parts / Hour: {}", status.parts_per_hour);
    let _ = writeln!(output);
    let _ = writeln!(output, "### {}", line.title);

    if line.series.iter().all(|point| point.value.is_none()) {
        let _ = writeln!(output, "No readings recorded for this shift.");
    } else {
        let _ = writeln!(output, "| Time | Parts/Hour |");
        let _ = writeln!(output, "|------|------------|");
        for point in &line.series {
            let _ = writeln!(output, "| {} | {} |", point.time, format_rate(point.value));
        }
    }

    let _ = writeln!(output, "Axis maximum: {}", line.y_axis_max);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::dashboard::build_dashboard;
    use serde_json::json;

    #[test]
    fn empty_dashboard_reports_sentinels() {
        let dashboard = build_dashboard(&[], &DashboardConfig::default());
        let report = build_report(&dashboard, "empty.csv");

        assert!(report.starts_with("# Flock Real Time Report\n"));
        assert!(report.contains("## Current Part Line 1"));
        assert!(report.contains("## Current Part Line 2"));
        assert!(report.contains("- Part Number: -"));
        assert!(report.contains("- Parts / Hour: 0"));
        assert!(report.contains("No readings recorded for this shift."));
        assert!(report.contains("Axis maximum: 150"));
    }

    #[test]
    fn gaps_render_as_no_data() {
        let row = json!({"line": "1", "time": "08:05:00", "partsPerHour": 42.3})
            .as_object()
            .cloned()
            .unwrap();
        let dashboard = build_dashboard(&[row], &DashboardConfig::default());
        let report = build_report(&dashboard, "shift.csv");

        assert!(report.contains("| 08:00 | 42.3 |"));
        assert!(report.contains("| 08:30 | No Data |"));
        assert!(report.contains("- Parts / Hour: 43"));
    }

    #[test]
    fn formats_rates() {
        assert_eq!(format_rate(Some(12.0)), "12");
        assert_eq!(format_rate(Some(0.0)), "0");
        assert_eq!(format_rate(None), "No Data");
    }
}
