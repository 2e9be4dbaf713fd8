//! Tabular output collaborators.
//!
//! A sink receives the complete record grid (header first) together with
//! layout directives and replaces whatever it held before. Writes are full
//! overwrites; callers sharing one destination must serialize their runs.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::SinkError;

use super::row::{COLUMN_COUNT, FIRST_HIDDEN_COLUMN, ITEM_NAME_COLUMN, ROW_TYPE_COLUMN};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderStyle {
    pub bold: bool,
    pub background: String,
}

/// Formatting directives for a grid renderer. Column indexes are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetLayout {
    pub right_to_left: bool,
    pub header: HeaderStyle,
    /// Column rendered in italics on rows whose row type column is `CHILD`.
    pub child_italic_column: usize,
    pub row_type_column: usize,
    pub hidden_columns: Vec<usize>,
    pub auto_resize_columns: Vec<usize>,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            right_to_left: true,
            header: HeaderStyle {
                bold: true,
                background: "#f3f3f3".to_string(),
            },
            child_italic_column: ITEM_NAME_COLUMN,
            row_type_column: ROW_TYPE_COLUMN,
            hidden_columns: (FIRST_HIDDEN_COLUMN..=COLUMN_COUNT).collect(),
            auto_resize_columns: (1..FIRST_HIDDEN_COLUMN).collect(),
        }
    }
}

pub trait TabularSink {
    /// Replaces the destination content with `records`.
    fn write(&mut self, records: &[Vec<String>], layout: &SheetLayout) -> Result<(), SinkError>;
}

#[derive(Serialize)]
struct SheetDocument<'a> {
    layout: &'a SheetLayout,
    rows: &'a [Vec<String>],
}

/// Writes the grid as a JSON document (`{"layout": ..., "rows": [[...]]}`).
///
/// The file is written next to the destination and renamed over it, so a
/// reader never observes a half-written report.
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("report.json");
        self.path.with_file_name(format!(".{}.tmp", name))
    }
}

impl TabularSink for JsonFileSink {
    fn write(&mut self, records: &[Vec<String>], layout: &SheetLayout) -> Result<(), SinkError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SinkError::CreateDirectory {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let content = serde_json::to_vec_pretty(&SheetDocument {
            layout,
            rows: records,
        })?;

        let temp_path = self.temp_path();
        let write_temp = || -> std::io::Result<()> {
            let mut file = std::fs::File::create(&temp_path)?;
            file.write_all(&content)?;
            file.sync_all()
        };
        write_temp().map_err(|e| SinkError::WriteFile {
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = std::fs::remove_file(&temp_path);
            SinkError::WriteFile {
                path: self.path.clone(),
                source: e,
            }
        })
    }
}

/// Keeps the last written grid in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<Vec<String>>,
    pub layout: Option<SheetLayout>,
    pub writes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TabularSink for MemorySink {
    fn write(&mut self, records: &[Vec<String>], layout: &SheetLayout) -> Result<(), SinkError> {
        self.records = records.to_vec();
        self.layout = Some(layout.clone());
        self.writes += 1;
        Ok(())
    }
}
