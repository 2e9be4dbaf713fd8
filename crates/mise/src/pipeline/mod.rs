pub mod config;
pub mod context;
pub mod runner;

pub use config::PipelineConfig;
pub use context::PipelineContext;
pub use runner::{Pipeline, RunSummary};
