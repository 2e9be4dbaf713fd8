use tracing::{debug, info};

use crate::catalog::FileCatalog;
use crate::error::ResolveError;

use super::filter::{extract_date_from_file_name, filter_event_files, CandidateFile};
use super::selector::select_event_file;

/// Decides which event file a run should load.
pub struct EventFileResolver<'a> {
    catalog: &'a dyn FileCatalog,
}

impl<'a> EventFileResolver<'a> {
    pub fn new(catalog: &'a dyn FileCatalog) -> Self {
        Self { catalog }
    }

    /// Resolves the active event file.
    ///
    /// A non-empty `override_id` is fetched directly and the catalog is not
    /// listed. Its date is extracted when the name follows the grammar and
    /// left as `None` otherwise. Without an override the catalog is listed,
    /// filtered by name, and handed to the date selector.
    pub fn resolve(
        &self,
        override_id: Option<&str>,
        today: &str,
    ) -> Result<CandidateFile, ResolveError> {
        if let Some(file_id) = override_id.filter(|id| !id.is_empty()) {
            return self.resolve_override(file_id);
        }

        let entries = self
            .catalog
            .list()
            .map_err(|e| ResolveError::CatalogUnavailable {
                location: self.catalog.location(),
                source: e,
            })?;

        let candidates = filter_event_files(&entries);
        debug!(
            listed = entries.len(),
            valid = candidates.len(),
            "Filtered event file candidates"
        );

        let selected = select_event_file(today, &candidates)
            .cloned()
            .ok_or_else(|| ResolveError::NoValidFilesFound {
                location: self.catalog.location(),
            })?;

        info!(
            file_id = %selected.file_id,
            file_name = %selected.file_name,
            today = %today,
            "Selected event file"
        );
        Ok(selected)
    }

    fn resolve_override(&self, file_id: &str) -> Result<CandidateFile, ResolveError> {
        let entry = self
            .catalog
            .entry(file_id)
            .map_err(|e| ResolveError::FileAccess {
                file_id: file_id.to_string(),
                source: e,
            })?;

        let extracted_date = extract_date_from_file_name(&entry.file_name);
        info!(
            file_id = %entry.file_id,
            file_name = %entry.file_name,
            dated = extracted_date.is_some(),
            "Using event file override"
        );

        Ok(CandidateFile {
            file_id: entry.file_id,
            file_name: entry.file_name,
            extracted_date,
        })
    }
}
