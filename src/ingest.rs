use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::RawRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(Error::UnknownFormat(path.to_path_buf())),
        }
    }
}

/// Load a production log export into raw rows.
pub fn load_rows(path: &Path, format: Option<InputFormat>) -> Result<Vec<RawRow>> {
    let format = match format {
        Some(format) => format,
        None => InputFormat::from_path(path)?,
    };

    let rows = match format {
        InputFormat::Csv => read_csv(std::fs::File::open(path)?)?,
        InputFormat::Json => read_json(&std::fs::read_to_string(path)?)?,
    };

    debug!(rows = rows.len(), path = %path.display(), ?format, "loaded production log");
    Ok(rows)
}

/// Every CSV cell becomes a JSON string keyed by its header.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| (header.to_string(), Value::String(cell.to_string())))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

pub fn read_json(text: &str) -> Result<Vec<RawRow>> {
    let Value::Array(items) = serde_json::from_str::<Value>(text)? else {
        return Err(Error::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(row) => Ok(row),
            _ => Err(Error::NotAnObject(index)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_rows_keep_headers_as_keys() {
        let data = "Line,Part Number,Parts Per Hour,Time\n1,P1,42.3,08:05:00\n2,Q1,,\n";
        let rows = read_csv(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Part Number"], Value::String("P1".to_string()));
        assert_eq!(rows[1]["Parts Per Hour"], Value::String(String::new()));
    }

    #[test]
    fn short_csv_records_are_tolerated() {
        let data = "line,time,rate\n1,08:00:00\n";
        let rows = read_csv(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].contains_key("rate"));
    }

    #[test]
    fn json_requires_array_of_objects() {
        let rows = read_json(r#"[{"line": "1"}, {"line": 2}]"#).unwrap();
        assert_eq!(rows.len(), 2);

        assert!(matches!(read_json(r#"{"line": "1"}"#), Err(Error::NotAnArray)));
        assert!(matches!(
            read_json(r#"[{"line": "1"}, 3]"#),
            Err(Error::NotAnObject(1))
        ));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            InputFormat::from_path(Path::new("log.CSV")).unwrap(),
            InputFormat::Csv
        );
        assert_eq!(
            InputFormat::from_path(Path::new("log.json")).unwrap(),
            InputFormat::Json
        );
        assert!(InputFormat::from_path(Path::new("log.xlsx")).is_err());
    }
}
