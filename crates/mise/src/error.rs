use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MiseError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Event file resolution error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Event document error: {0}")]
    Event(#[from] EventError),

    #[error("Report output error: {0}")]
    Sink(#[from] SinkError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },

    #[error("Schema validation failed: {errors}")]
    SchemaValidation { errors: String },

    #[error("Unknown timezone '{0}'")]
    InvalidTimezone(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to list directory '{path}': {source}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {file_id}")]
    NotFound { file_id: String },
}

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Cannot load event file '{file_id}': {source}")]
    FileAccess {
        file_id: String,
        #[source]
        source: CatalogError,
    },

    #[error("Cannot access events location '{location}': {source}")]
    CatalogUnavailable {
        location: String,
        #[source]
        source: CatalogError,
    },

    #[error(
        "No valid event files found in '{location}'. Required file name format: {}",
        crate::resolver::EVENT_FILE_FORMAT
    )]
    NoValidFilesFound { location: String },
}

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Malformed JSON in event file '{file_name}' ({file_id}): {source}")]
    MalformedJson {
        file_name: String,
        file_id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Event file '{file_name}' ({file_id}) is not valid UTF-8 text")]
    InvalidEncoding { file_name: String, file_id: String },

    #[error("{}", missing_field_message(.field, .index))]
    MissingRequiredField {
        field: &'static str,
        index: Option<usize>,
    },
}

fn missing_field_message(field: &str, index: &Option<usize>) -> String {
    match index {
        Some(index) => format!("Missing required field '{}' in ingredients (index {})", field, index),
        None => format!("Missing required field '{}' in event document", field),
    }
}

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to create directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MiseError>;
