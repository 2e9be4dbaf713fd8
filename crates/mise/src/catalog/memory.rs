use crate::catalog::{CatalogEntry, FileCatalog};
use crate::error::CatalogError;

/// In-memory catalog, used by tests and by callers that already hold the
/// event files (for example after downloading them from a remote store).
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    location: String,
    files: Vec<(CatalogEntry, Vec<u8>)>,
}

impl MemoryCatalog {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            files: Vec::new(),
        }
    }

    pub fn with_file(
        mut self,
        file_id: impl Into<String>,
        file_name: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        self.insert(file_id, file_name, content);
        self
    }

    pub fn insert(
        &mut self,
        file_id: impl Into<String>,
        file_name: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) {
        self.files
            .push((CatalogEntry::new(file_id, file_name), content.into()));
    }

    fn find(&self, file_id: &str) -> Result<&(CatalogEntry, Vec<u8>), CatalogError> {
        self.files
            .iter()
            .find(|(entry, _)| entry.file_id == file_id)
            .ok_or_else(|| CatalogError::NotFound {
                file_id: file_id.to_string(),
            })
    }
}

impl FileCatalog for MemoryCatalog {
    fn location(&self) -> String {
        self.location.clone()
    }

    fn list(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        Ok(self.files.iter().map(|(entry, _)| entry.clone()).collect())
    }

    fn entry(&self, file_id: &str) -> Result<CatalogEntry, CatalogError> {
        self.find(file_id).map(|(entry, _)| entry.clone())
    }

    fn read(&self, file_id: &str) -> Result<Vec<u8>, CatalogError> {
        self.find(file_id).map(|(_, content)| content.clone())
    }
}
