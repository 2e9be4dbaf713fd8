use serde::Serialize;
use tracing::debug;

use crate::aggregate::AggregateGroup;
use crate::config::Labels;
use crate::event::ItemSource;

use super::row::{
    header_record, quantity_display, ChildRow, ParentRow, ReportRow, CHILD_INDENT,
};

/// The complete two-level report for one run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub groups: Vec<AggregateGroup>,
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Header followed by every row, each exactly nine fields wide.
    pub fn records(&self) -> Vec<Vec<String>> {
        std::iter::once(header_record())
            .chain(self.rows.iter().map(ReportRow::to_record))
            .collect()
    }

    pub fn parent_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| matches!(r, ReportRow::Parent(_)))
            .count()
    }

    /// Groups whose item name contains `fragment`.
    pub fn find_groups(&self, fragment: &str) -> Vec<&AggregateGroup> {
        self.groups
            .iter()
            .filter(|g| g.item_name.contains(fragment))
            .collect()
    }
}

/// Turns sorted aggregate groups into parent rows each followed by its
/// child rows.
pub struct ReportBuilder {
    labels: Labels,
}

impl ReportBuilder {
    pub fn new(labels: Labels) -> Self {
        Self { labels }
    }

    /// Builds the full report from scratch; group order is kept as given.
    pub fn build(&self, groups: Vec<AggregateGroup>) -> Report {
        let member_count: usize = groups.iter().map(|g| g.members.len()).sum();
        let mut rows = Vec::with_capacity(groups.len() + member_count);

        for group in &groups {
            rows.push(ReportRow::Parent(self.parent_row(group)));
            rows.extend(
                group
                    .members
                    .iter()
                    .map(|member| ReportRow::Child(self.child_row(&group.item_key, member))),
            );
        }

        debug!(
            groups = groups.len(),
            rows = rows.len(),
            "Built report rows"
        );
        Report { groups, rows }
    }

    fn parent_row(&self, group: &AggregateGroup) -> ParentRow {
        ParentRow {
            status: self.labels.default_status.clone(),
            item_name: group.item_name.clone(),
            supplier: String::new(),
            total: quantity_display(&group.total_quantity, &group.unit),
            context: group
                .members
                .first()
                .map(|m| m.event_name.clone())
                .unwrap_or_default(),
            item_key: group.item_key.clone(),
            trace_source_ids: group.source_ids().map(str::to_string).collect(),
        }
    }

    fn child_row(&self, item_key: &str, member: &ItemSource) -> ChildRow {
        // The only place a station placeholder is synthesized.
        let station = match &member.station_name {
            Some(name) => name.clone(),
            None => format!("{}{}", self.labels.station_prefix, member.station_id),
        };

        ChildRow {
            label: format!("{}{}", CHILD_INDENT, station),
            quantity: quantity_display(&member.qty, &member.unit),
            item_key: item_key.to_string(),
            source_id: member.source_id.clone(),
        }
    }
}
