use std::fmt;

use serde::{Deserialize, Serialize};

/// One loosely typed row handed over by the upload side.
pub type RawRow = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A normalized production reading. Empty text fields mean the source row
/// had nothing usable there; `time` is `HH:MM:SS` (with `.fff` when the source
/// had sub-second precision) whenever it could be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionEntry {
    pub line: LineId,
    pub part_number: String,
    pub part_name: String,
    pub total_quantity: String,
    pub parts_per_hour: f64,
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStatus {
    pub part_number: Option<String>,
    pub part_name: Option<String>,
    pub total_quantity: Option<String>,
    pub parts_per_hour: Option<i64>,
}

/// Four label values as shown on the status panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDisplay {
    pub part_number: String,
    pub part_name: String,
    pub total_quantity: String,
    pub parts_per_hour: String,
}

pub const TEXT_SENTINEL: &str = "-";
pub const QUANTITY_SENTINEL: &str = "0";

impl LineStatus {
    pub fn display(&self) -> StatusDisplay {
        let text = |value: &Option<String>, sentinel: &str| {
            value.clone().unwrap_or_else(|| sentinel.to_string())
        };

        StatusDisplay {
            part_number: text(&self.part_number, TEXT_SENTINEL),
            part_name: text(&self.part_name, TEXT_SENTINEL),
            total_quantity: text(&self.total_quantity, QUANTITY_SENTINEL),
            parts_per_hour: self
                .parts_per_hour
                .map(|rate| rate.to_string())
                .unwrap_or_else(|| QUANTITY_SENTINEL.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub time: String,
    pub value: Option<f64>,
}
