use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Cannot infer input format for {0}; pass --format csv or --format json")]
    UnknownFormat(PathBuf),

    #[error("JSON row {0} is not an object")]
    NotAnObject(usize),

    #[error("Expected a JSON array of rows")]
    NotAnArray,
}

pub type Result<T> = std::result::Result<T, Error>;
