use serde::{Deserialize, Serialize};

use crate::aggregate::Collation;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub version: String,
    pub events_directory: String,
    #[serde(default)]
    pub active_event_file_id: Option<String>,
    pub output_path: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub collation: Collation,
    #[serde(default)]
    pub labels: Labels,
}

fn default_timezone() -> String {
    "Asia/Jerusalem".to_string()
}

impl Config {
    /// The override file id, if one is set and non-empty.
    pub fn active_event_file_id(&self) -> Option<&str> {
        self.active_event_file_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }
}

/// Placeholder texts used when the event document leaves something out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default = "default_unnamed_event")]
    pub unnamed_event: String,
    #[serde(default = "default_unnamed_item")]
    pub unnamed_item: String,
    #[serde(default = "default_station_prefix")]
    pub station_prefix: String,
    #[serde(default = "default_status")]
    pub default_status: String,
}

fn default_unnamed_event() -> String {
    "אירוע ללא שם".to_string()
}

fn default_unnamed_item() -> String {
    "פריט ללא שם".to_string()
}

fn default_station_prefix() -> String {
    "תחנה #".to_string()
}

fn default_status() -> String {
    "Unclassified".to_string()
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            unnamed_event: default_unnamed_event(),
            unnamed_item: default_unnamed_item(),
            station_prefix: default_station_prefix(),
            default_status: default_status(),
        }
    }
}
