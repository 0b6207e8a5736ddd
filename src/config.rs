use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::MatchPolicy;
use crate::models::LineId;

/// Display settings for one production line. The engine only uses `id`;
/// title and color are handed through to the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineConfig {
    pub id: LineId,
    pub title: String,
    pub color: String,
}

impl LineConfig {
    pub fn new(id: &str, color: &str) -> Self {
        Self {
            id: LineId::new(id),
            title: format!("Line {id} Production Rate"),
            color: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub title: String,
    pub match_policy: MatchPolicy,
    pub lines: Vec<LineConfig>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: String::from("Flock Real Time Report"),
            match_policy: MatchPolicy::default(),
            lines: vec![LineConfig::new("1", "#3B82F6"), LineConfig::new("2", "#10B981")],
        }
    }
}

impl DashboardConfig {
    /// Load overrides from a TOML file; omitted keys keep their defaults.
    pub fn read_config_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn line(&self, id: &LineId) -> Option<&LineConfig> {
        self.lines.iter().find(|line| &line.id == id)
    }
}
