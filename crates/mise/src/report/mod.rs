pub mod builder;
pub mod row;
pub mod sink;

pub use builder::{Report, ReportBuilder};
pub use row::{ChildRow, ParentRow, ReportRow, RowType, COLUMN_COUNT, HEADER, TRACE_DELIMITER};
pub use sink::{HeaderStyle, JsonFileSink, MemorySink, SheetLayout, TabularSink};
