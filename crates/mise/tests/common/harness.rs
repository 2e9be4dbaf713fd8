//! Test harness for isolated pipeline runs.
//!
//! The `TestHarness` owns a temporary directory with an `events/` folder
//! (the directory catalog) and an `output/` folder for rendered reports.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use mise::{
    Collation, DirectoryCatalog, JsonFileSink, Labels, Pipeline, PipelineConfig, Result,
    RunSummary,
};

pub struct TestHarness {
    temp_dir: TempDir,
    pub events_dir: PathBuf,
    pub output_path: PathBuf,
    today: String,
    override_id: Option<String>,
}

impl TestHarness {
    /// Create a harness whose "today" is fixed to `today`.
    pub fn new(today: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let events_dir = temp_dir.path().join("events");
        std::fs::create_dir_all(&events_dir).expect("Failed to create events dir");
        let output_path = temp_dir.path().join("output").join("workspace.json");

        Self {
            temp_dir,
            events_dir,
            output_path,
            today: today.to_string(),
            override_id: None,
        }
    }

    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file into the events directory.
    pub fn add_event_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.events_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write event file");
        path
    }

    /// Load a specific file instead of selecting by date.
    pub fn with_override(mut self, file_id: &str) -> Self {
        self.override_id = Some(file_id.to_string());
        self
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            events_directory: self.events_dir.clone(),
            active_event_file_id: self.override_id.clone(),
            output_path: self.output_path.clone(),
            timezone: chrono_tz::Asia::Jerusalem,
            today: Some(self.today.clone()),
            collation: Collation::He,
            labels: Labels::default(),
        }
    }

    pub fn pipeline(&self) -> Pipeline {
        Pipeline::from_config(Arc::new(self.pipeline_config()))
    }

    pub fn catalog(&self) -> DirectoryCatalog {
        DirectoryCatalog::new(&self.events_dir)
    }

    /// Run the full pipeline, writing to `output_path`.
    pub fn run(&self) -> Result<RunSummary> {
        let mut sink = JsonFileSink::new(&self.output_path);
        self.pipeline().run(&self.catalog(), &mut sink)
    }

    /// Rows of the written report, header included.
    pub fn written_rows(&self) -> Vec<Vec<String>> {
        let content = std::fs::read(&self.output_path).expect("Report was not written");
        let doc: serde_json::Value = serde_json::from_slice(&content).expect("Invalid report JSON");
        serde_json::from_value(doc["rows"].clone()).expect("Report rows have wrong shape")
    }

    pub fn report_exists(&self) -> bool {
        self.output_path.exists()
    }
}
