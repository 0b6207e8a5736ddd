pub mod config;
pub mod dashboard;
pub mod error;
pub mod grid;
pub mod ingest;
pub mod models;
pub mod normalize;
pub mod report;
pub mod status;

pub use config::{DashboardConfig, LineConfig};
pub use dashboard::{build_dashboard, Dashboard, LineReport};
pub use grid::{build_series, y_axis_max, MatchPolicy};
pub use models::{LineId, LineStatus, ProductionEntry, RawRow, StatusDisplay, TimeSeriesPoint};
pub use normalize::normalize;
pub use status::latest_status;
