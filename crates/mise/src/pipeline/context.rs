use crate::aggregate::AggregateGroup;
use crate::event::{EventDocument, ItemSource};
use crate::report::Report;
use crate::resolver::CandidateFile;

/// Everything a successful run produced, step by step.
///
/// Only built once every step has succeeded; a failed run yields an error
/// and no context, so there is never a partial report to hand to a sink.
#[derive(Debug)]
pub struct PipelineContext {
    // Date the selection ran against
    pub today: String,

    // Step 1: resolve the active event file
    pub file: CandidateFile,

    // Step 2: read and decode it
    pub document: EventDocument,

    // Step 3: one normalized record per ingredient
    pub sources: Vec<ItemSource>,

    // Step 4: grouped, totalled and sorted
    pub groups: Vec<AggregateGroup>,

    // Step 5: parent/child rows
    pub report: Report,
}
