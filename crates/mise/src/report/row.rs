//! The nine-column report record.
//!
//! Columns 1-5 are for people: status, item name, supplier, total, context.
//! Columns 6-9 are hidden metadata kept for formatting and traceability:
//! row type, item key, source id, joined trace source ids.

use serde::Serialize;

pub const COLUMN_COUNT: usize = 9;

pub const HEADER: [&str; COLUMN_COUNT] = [
    "מצב",
    "שם פריט",
    "ספק",
    "סה\"כ",
    "הקשר",
    "rowType",
    "itemKey",
    "sourceId",
    "traceSourceIds",
];

/// 1-based index of the first hidden metadata column.
pub const FIRST_HIDDEN_COLUMN: usize = 6;

/// 1-based index of the item name column.
pub const ITEM_NAME_COLUMN: usize = 2;

/// 1-based index of the row type column.
pub const ROW_TYPE_COLUMN: usize = 6;

pub const TRACE_DELIMITER: &str = ",";

pub const CHILD_INDENT: &str = "  ↳ ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RowType {
    Parent,
    Child,
}

impl RowType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowType::Parent => "PARENT",
            RowType::Child => "CHILD",
        }
    }
}

/// Aggregate row: one per item group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentRow {
    pub status: String,
    pub item_name: String,
    pub supplier: String,
    pub total: String,
    pub context: String,
    pub item_key: String,
    pub trace_source_ids: Vec<String>,
}

/// Provenance row: one per contributing source, directly under its parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildRow {
    pub label: String,
    pub quantity: String,
    pub item_key: String,
    pub source_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rowType", rename_all = "UPPERCASE")]
pub enum ReportRow {
    Parent(ParentRow),
    Child(ChildRow),
}

impl ReportRow {
    pub fn row_type(&self) -> RowType {
        match self {
            ReportRow::Parent(_) => RowType::Parent,
            ReportRow::Child(_) => RowType::Child,
        }
    }

    /// Flattens the row into its fixed-width tabular form.
    pub fn to_record(&self) -> Vec<String> {
        let row_type = self.row_type().as_str().to_string();
        match self {
            ReportRow::Parent(row) => vec![
                row.status.clone(),
                row.item_name.clone(),
                row.supplier.clone(),
                row.total.clone(),
                row.context.clone(),
                row_type,
                row.item_key.clone(),
                String::new(),
                row.trace_source_ids.join(TRACE_DELIMITER),
            ],
            ReportRow::Child(row) => vec![
                String::new(),
                row.label.clone(),
                String::new(),
                String::new(),
                row.quantity.clone(),
                row_type,
                row.item_key.clone(),
                row.source_id.clone(),
                String::new(),
            ],
        }
    }
}

pub fn header_record() -> Vec<String> {
    HEADER.iter().map(|h| h.to_string()).collect()
}

/// `"<value> <unit>"` when both are present, otherwise just the value.
pub fn quantity_display(value: &str, unit: &str) -> String {
    if !value.is_empty() && !unit.is_empty() {
        format!("{} {}", value, unit)
    } else {
        value.to_string()
    }
}
