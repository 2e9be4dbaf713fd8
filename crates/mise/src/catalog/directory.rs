use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::catalog::{CatalogEntry, FileCatalog};
use crate::error::CatalogError;

/// Catalog backed by a local directory.
///
/// File identifiers are paths relative to the directory root; an absolute
/// path is also accepted by [`FileCatalog::entry`] and [`FileCatalog::read`]
/// so an override may point outside the events directory.
pub struct DirectoryCatalog {
    root: PathBuf,
}

impl DirectoryCatalog {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn resolve(&self, file_id: &str) -> PathBuf {
        self.root.join(file_id)
    }
}

impl FileCatalog for DirectoryCatalog {
    fn location(&self) -> String {
        self.root.display().to_string()
    }

    fn list(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1) // Only the top level; nested folders are not event files
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(CatalogError::ListDirectory {
                        path: self.root.clone(),
                        source: e,
                    });
                }
                Err(e) => {
                    warn!("Skipping unreadable entry in {}: {}", self.root.display(), e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(file_name) = entry.file_name().to_str() else {
                debug!("Skipping non UTF-8 file name: {:?}", entry.file_name());
                continue;
            };

            entries.push(CatalogEntry::new(file_name, file_name));
        }

        info!("Listed {} files in {}", entries.len(), self.root.display());
        Ok(entries)
    }

    fn entry(&self, file_id: &str) -> Result<CatalogEntry, CatalogError> {
        let path = self.resolve(file_id);
        if !path.is_file() {
            return Err(CatalogError::NotFound {
                file_id: file_id.to_string(),
            });
        }

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(file_id)
            .to_string();

        Ok(CatalogEntry::new(file_id, file_name))
    }

    fn read(&self, file_id: &str) -> Result<Vec<u8>, CatalogError> {
        let path = self.resolve(file_id);
        std::fs::read(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CatalogError::NotFound {
                file_id: file_id.to_string(),
            },
            _ => CatalogError::ReadFile { path, source: e },
        })
    }
}
