//! File-listing collaborators.
//!
//! The pipeline only needs three things from a file store: list the entries
//! in the events location, look up one entry by identifier, and read its
//! bytes. Everything else (folders, permissions, MIME types) stays behind
//! this trait.

pub mod directory;
pub mod memory;

pub use directory::DirectoryCatalog;
pub use memory::MemoryCatalog;

use crate::error::CatalogError;

/// One file as seen by a catalog: an opaque identifier plus its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub file_id: String,
    pub file_name: String,
}

impl CatalogEntry {
    pub fn new(file_id: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            file_name: file_name.into(),
        }
    }
}

pub trait FileCatalog {
    /// Human-readable description of where files are listed from, used in
    /// error messages.
    fn location(&self) -> String;

    /// Lists every file in the events location. Order is whatever the
    /// backing store yields.
    fn list(&self) -> Result<Vec<CatalogEntry>, CatalogError>;

    /// Looks up a single file by identifier without listing.
    fn entry(&self, file_id: &str) -> Result<CatalogEntry, CatalogError>;

    /// Reads the full byte content of a file.
    fn read(&self, file_id: &str) -> Result<Vec<u8>, CatalogError>;
}
