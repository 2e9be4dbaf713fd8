use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::Serialize;

use crate::catalog::CatalogEntry;

/// Human-readable form of the accepted event file name grammar.
pub const EVENT_FILE_FORMAT: &str = "event_YYYY-MM-DD_<slug>.json";

// ASCII digits only; `\d` would also accept other Unicode decimal digits.
static RE_EVENT_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^event_([0-9]{4}-[0-9]{2}-[0-9]{2})_(.+)\.json$").unwrap()
});

/// A file that may be loaded as the active event.
///
/// `extracted_date` is the `YYYY-MM-DD` text taken from the file name, kept
/// unparsed. It is `None` only for an override whose name does not follow
/// the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateFile {
    pub file_id: String,
    pub file_name: String,
    pub extracted_date: Option<String>,
}

/// Returns the embedded date when `file_name` matches the grammar.
///
/// Does not look at the slug beyond the grammar itself, so an override
/// named `event_2025-01-01_ .json` still yields its date.
pub fn extract_date_from_file_name(file_name: &str) -> Option<String> {
    RE_EVENT_FILE
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Keeps only catalog entries whose names match the event file grammar and
/// whose slug is not blank. Everything else is dropped without error.
pub fn filter_event_files(entries: &[CatalogEntry]) -> Vec<CandidateFile> {
    entries
        .iter()
        .filter_map(|entry| {
            let Some(caps) = RE_EVENT_FILE.captures(&entry.file_name) else {
                debug!("Ignoring file with unrecognized name: {}", entry.file_name);
                return None;
            };

            let slug = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
            if slug.trim().is_empty() {
                debug!("Ignoring event file with blank slug: {}", entry.file_name);
                return None;
            }

            Some(CandidateFile {
                file_id: entry.file_id.clone(),
                file_name: entry.file_name.clone(),
                extracted_date: caps.get(1).map(|m| m.as_str().to_string()),
            })
        })
        .collect()
}
