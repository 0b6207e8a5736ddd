use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde_json::Value;
use tracing::debug;

use crate::models::{LineId, ProductionEntry, RawRow};

const LINE_KEYS: &[&str] = &["line", "lineid", "linenumber", "lineno"];
const PART_NUMBER_KEYS: &[&str] = &["partnumber", "partno", "partnum", "pn"];
const PART_NAME_KEYS: &[&str] = &["partname", "description"];
const QUANTITY_KEYS: &[&str] = &["totalquantity", "totalqty", "quantity", "qty"];
const RATE_KEYS: &[&str] = &["partsperhour", "partshour", "pph", "rate"];
const TIME_KEYS: &[&str] = &["time", "timestamp", "timelabel"];

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M", "%I:%M:%S %p", "%I:%M %p"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Turns raw upload rows into production entries, keeping input order.
/// Rows with no line id are dropped; everything else is kept with empty
/// text or a zero rate standing in for missing values.
pub fn normalize(raw_rows: &[RawRow]) -> Vec<ProductionEntry> {
    let mut entries = Vec::with_capacity(raw_rows.len());

    for (index, row) in raw_rows.iter().enumerate() {
        let line = text_field(row, LINE_KEYS);
        if line.is_empty() {
            debug!(row = index, "dropping row without a line id");
            continue;
        }

        let time = text_field(row, TIME_KEYS);
        let time = match parse_time_of_day(&time) {
            Some(parsed) => time_label(parsed),
            None => time,
        };

        entries.push(ProductionEntry {
            line: LineId::new(line),
            part_number: text_field(row, PART_NUMBER_KEYS),
            part_name: text_field(row, PART_NAME_KEYS),
            total_quantity: text_field(row, QUANTITY_KEYS),
            parts_per_hour: rate_field(row),
            time,
        });
    }

    debug!(
        kept = entries.len(),
        dropped = raw_rows.len() - entries.len(),
        "normalized production rows"
    );
    entries
}

/// Reads a time label as a time of day. A date part, if present, is ignored.
pub fn parse_time_of_day(label: &str) -> Option<NaiveTime> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }

    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(label, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(label, format).ok())
                .map(|datetime| datetime.time())
        })
}

// Sub-second precision survives so the grid tolerance sees the real offset.
fn time_label(time: NaiveTime) -> String {
    if time.nanosecond() == 0 {
        time.format("%H:%M:%S").to_string()
    } else {
        time.format("%H:%M:%S%.3f").to_string()
    }
}

/// First alias carrying a usable value; blank or null columns are skipped.
fn field<'a>(row: &'a RawRow, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|wanted| {
        row.iter()
            .filter(|(_, value)| !is_blank(value))
            .find(|(key, _)| canonical_key(key) == *wanted)
            .map(|(_, value)| value)
    })
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

fn canonical_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn text_field(row: &RawRow, keys: &[&str]) -> String {
    match field(row, keys) {
        Some(Value::String(text)) => text.trim().to_string(),
        Some(Value::Number(number)) => number_text(number),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => String::new(),
    }
}

// Integral floats print without a fractional part, so `1.0` and `1` name the same line.
fn number_text(number: &serde_json::Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
            format!("{}", value as i64)
        }
        _ => number.to_string(),
    }
}

fn rate_field(row: &RawRow) -> f64 {
    let rate = match field(row, RATE_KEYS) {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    rate.filter(|value| value.is_finite()).unwrap_or(0.0)
}
