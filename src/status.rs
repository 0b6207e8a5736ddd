use crate::models::{LineId, LineStatus, ProductionEntry};

/// Entries for one line, in the order they arrived.
pub fn entries_for_line<'a>(
    entries: &'a [ProductionEntry],
    line: &LineId,
) -> Vec<&'a ProductionEntry> {
    entries.iter().filter(|entry| &entry.line == line).collect()
}

/// The most recent reading for a line is the last one uploaded for it; the
/// time label is not consulted.
pub fn latest_status(entries: &[ProductionEntry], line: &LineId) -> LineStatus {
    match entries.iter().rev().find(|entry| &entry.line == line) {
        Some(entry) => status_from_entry(entry),
        None => LineStatus::default(),
    }
}

fn status_from_entry(entry: &ProductionEntry) -> LineStatus {
    LineStatus {
        part_number: non_empty(&entry.part_number),
        part_name: non_empty(&entry.part_name),
        total_quantity: non_empty(&entry.total_quantity),
        parts_per_hour: Some(ceil_rate(entry.parts_per_hour)),
    }
}

/// Rates are always reported rounded up.
pub fn ceil_rate(rate: f64) -> i64 {
    // `as` saturates and maps NaN to 0, and -0.0 prints as "0".
    rate.ceil() as i64
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
