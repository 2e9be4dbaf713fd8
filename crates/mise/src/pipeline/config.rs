use std::path::PathBuf;

use chrono_tz::Tz;

use crate::aggregate::Collation;
use crate::config::{parse_date, parse_timezone, Config, Labels};
use crate::error::ConfigError;
use crate::resolver::today_in;

/// Everything one pipeline run needs, passed in explicitly.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub events_directory: PathBuf,
    pub active_event_file_id: Option<String>,
    pub output_path: PathBuf,
    pub timezone: Tz,
    /// Fixed `YYYY-MM-DD` date used instead of the clock.
    pub today: Option<String>,
    pub collation: Collation,
    pub labels: Labels,
}

impl PipelineConfig {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            events_directory: PathBuf::from(&config.events_directory),
            active_event_file_id: config.active_event_file_id().map(str::to_string),
            output_path: PathBuf::from(&config.output_path),
            timezone: parse_timezone(&config.timezone)?,
            today: None,
            collation: config.collation,
            labels: config.labels.clone(),
        })
    }

    /// Pins "today" to a given date, validating its format.
    pub fn with_today(mut self, today: &str) -> Result<Self, ConfigError> {
        self.today = Some(parse_date(today)?);
        Ok(self)
    }

    pub fn with_active_event_file_id(mut self, file_id: Option<String>) -> Self {
        self.active_event_file_id = file_id.filter(|id| !id.trim().is_empty());
        self
    }

    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = path;
        self
    }

    /// The date selection runs against: the pinned date, or the current
    /// civil date in the configured timezone.
    pub fn today(&self) -> String {
        self.today
            .clone()
            .unwrap_or_else(|| today_in(self.timezone))
    }
}
