use std::sync::Arc;

use serde::Serialize;
use tracing::{info, info_span};

use crate::aggregate::Aggregator;
use crate::catalog::FileCatalog;
use crate::error::{ResolveError, Result};
use crate::event::{decode_event_document, EventDocument, EventParser};
use crate::report::{ReportBuilder, SheetLayout, TabularSink};
use crate::resolver::{CandidateFile, EventFileResolver};

use super::config::PipelineConfig;
use super::context::PipelineContext;

/// Outcome of a run that wrote its report.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub file: CandidateFile,
    pub today: String,
    pub sources: usize,
    pub groups: usize,
    pub rows: usize,
}

/// Resolve → load → parse → aggregate → build → write, strictly in order.
///
/// Each run rebuilds everything from the input document; nothing is kept
/// between runs.
pub struct Pipeline {
    config: Arc<PipelineConfig>,
    parser: EventParser,
    aggregator: Aggregator,
    builder: ReportBuilder,
    layout: SheetLayout,
}

impl Pipeline {
    /// Builds all sub-components from config.
    pub fn from_config(config: Arc<PipelineConfig>) -> Self {
        let parser = EventParser::new(&config.labels);
        let aggregator = Aggregator::new(config.collation);
        let builder = ReportBuilder::new(config.labels.clone());

        Self {
            config,
            parser,
            aggregator,
            builder,
            layout: SheetLayout::default(),
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Only decides which event file would be loaded.
    pub fn resolve(&self, catalog: &dyn FileCatalog) -> Result<CandidateFile> {
        let today = self.config.today();
        self.step_resolve(catalog, &today)
    }

    /// Runs every step except the final write.
    pub fn prepare(&self, catalog: &dyn FileCatalog) -> Result<PipelineContext> {
        let today = self.config.today();
        let _pipeline_span = info_span!("pipeline", today = %today).entered();

        // Step 1: Resolve the active event file
        let file = {
            let _step = info_span!("resolve_event_file").entered();
            self.step_resolve(catalog, &today)?
        };

        // Step 2: Read and decode
        let document = {
            let _step = info_span!("load_document", file_name = %file.file_name).entered();
            self.step_load(catalog, &file)?
        };

        // Step 3: Normalize ingredients into item sources
        let sources = {
            let _step = info_span!("parse_items").entered();
            self.parser.parse(&document)?
        };

        // Step 4: Group and total
        let groups = {
            let _step = info_span!("aggregate").entered();
            self.aggregator.aggregate(&sources)
        };

        // Step 5: Build parent/child rows
        let report = {
            let _step = info_span!("build_report").entered();
            self.builder.build(groups.clone())
        };

        Ok(PipelineContext {
            today,
            file,
            document,
            sources,
            groups,
            report,
        })
    }

    /// Runs the full pipeline and hands the report to `sink`.
    ///
    /// Any failure aborts before the sink is called.
    pub fn run(&self, catalog: &dyn FileCatalog, sink: &mut dyn TabularSink) -> Result<RunSummary> {
        let ctx = self.prepare(catalog)?;

        // Step 6: Write
        let records = ctx.report.records();
        {
            let _step = info_span!("write_report", rows = records.len()).entered();
            sink.write(&records, &self.layout)?;
        }

        let summary = RunSummary {
            file: ctx.file,
            today: ctx.today,
            sources: ctx.sources.len(),
            groups: ctx.groups.len(),
            rows: ctx.report.rows.len(),
        };
        info!(
            file_name = %summary.file.file_name,
            sources = summary.sources,
            groups = summary.groups,
            rows = summary.rows,
            "Procurement report written"
        );
        Ok(summary)
    }

    fn step_resolve(&self, catalog: &dyn FileCatalog, today: &str) -> Result<CandidateFile> {
        let resolver = EventFileResolver::new(catalog);
        Ok(resolver.resolve(self.config.active_event_file_id.as_deref(), today)?)
    }

    fn step_load(&self, catalog: &dyn FileCatalog, file: &CandidateFile) -> Result<EventDocument> {
        let content = catalog
            .read(&file.file_id)
            .map_err(|e| ResolveError::FileAccess {
                file_id: file.file_id.clone(),
                source: e,
            })?;

        Ok(decode_event_document(
            &content,
            &file.file_name,
            &file.file_id,
        )?)
    }
}
