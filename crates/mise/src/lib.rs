//! Deterministic event file selection and traceable procurement reports.
//!
//! A run picks one event file, flattens its ingredients into item sources
//! with content-derived ids, groups them by (name, unit), and renders a
//! parent/child report in which every total can be traced back to the
//! ingredient lines that produced it.

pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod error;
pub mod event;
pub mod ident;
pub mod pipeline;
pub mod report;
pub mod resolver;

pub use aggregate::{AggregateGroup, Aggregator, Collation};
pub use catalog::{CatalogEntry, DirectoryCatalog, FileCatalog, MemoryCatalog};
pub use config::{load_config, load_config_from_str, Config, Labels};
pub use error::{CatalogError, ConfigError, EventError, MiseError, ResolveError, Result, SinkError};
pub use event::{EventDocument, EventParser, ItemSource};
pub use pipeline::{Pipeline, PipelineConfig, PipelineContext, RunSummary};
pub use report::{JsonFileSink, MemorySink, Report, ReportBuilder, ReportRow, SheetLayout, TabularSink};
pub use resolver::{CandidateFile, EventFileResolver};
