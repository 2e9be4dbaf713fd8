use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::event::{format_number, ItemSource};
use crate::ident;

use super::collation::Collation;

/// All sources sharing one (item name, unit) identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateGroup {
    pub item_key: String,
    pub item_name: String,
    pub unit: String,
    /// Numeric sum when every given quantity is numeric, otherwise the
    /// first given raw value; empty when no member has a quantity.
    pub total_quantity: String,
    /// Members in encounter order.
    pub members: Vec<ItemSource>,
}

impl AggregateGroup {
    pub fn source_ids(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.source_id.as_str())
    }
}

pub struct Aggregator {
    collation: Collation,
}

impl Aggregator {
    pub fn new(collation: Collation) -> Self {
        Self { collation }
    }

    /// Groups sources by trimmed name and trimmed unit, totals each group,
    /// and returns the groups sorted by name then unit.
    ///
    /// Quantities in different units are never merged.
    pub fn aggregate(&self, sources: &[ItemSource]) -> Vec<AggregateGroup> {
        let mut index: HashMap<(String, String), usize> = HashMap::new();
        let mut groups: Vec<(String, String, Vec<ItemSource>)> = Vec::new();

        for source in sources {
            let name = source.item_name_raw.trim().to_string();
            let unit = source.unit.trim().to_string();

            match index.get(&(name.clone(), unit.clone())) {
                Some(&i) => groups[i].2.push(source.clone()),
                None => {
                    index.insert((name.clone(), unit.clone()), groups.len());
                    groups.push((name, unit, vec![source.clone()]));
                }
            }
        }

        let mut aggregated: Vec<AggregateGroup> = groups
            .into_iter()
            .map(|(item_name, unit, members)| {
                let item_key = ident::item_id(&item_name, &unit);
                let total_quantity = total_quantity(&members);
                AggregateGroup {
                    item_key,
                    item_name,
                    unit,
                    total_quantity,
                    members,
                }
            })
            .collect();

        // Output order comes from the sort alone, never from map iteration.
        aggregated.sort_by(|a, b| {
            self.collation
                .compare(&a.item_name, &b.item_name)
                .then_with(|| self.collation.compare(&a.unit, &b.unit))
        });

        debug!(
            sources = sources.len(),
            groups = aggregated.len(),
            "Aggregated item sources"
        );
        aggregated
    }
}

/// Longest numeric prefix accepted for a quantity: optional sign, then
/// `Infinity` or a decimal with optional exponent.
static RE_NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)").unwrap()
});

/// Totals the quantities of a group.
///
/// Empty quantities are skipped. If every remaining value starts with a
/// number (`"2 kg"` counts as 2) the sum of those numbers is returned;
/// otherwise the first remaining raw value is kept as-is and left for
/// manual review.
pub fn total_quantity(members: &[ItemSource]) -> String {
    let given: Vec<&str> = members
        .iter()
        .map(|m| m.qty.as_str())
        .filter(|q| !q.is_empty())
        .collect();

    let Some(first) = given.first() else {
        return String::new();
    };

    let numbers: Option<Vec<f64>> = given.iter().map(|q| parse_quantity(q)).collect();
    match numbers {
        Some(numbers) => format_number(numbers.iter().sum()),
        None => {
            debug!(
                first = %first,
                values = given.len(),
                "Non-numeric quantity in group, keeping first value"
            );
            first.to_string()
        }
    }
}

/// Reads the leading number of `value`, ignoring leading whitespace and
/// anything after the number. `None` when there is no leading number.
pub fn parse_quantity(value: &str) -> Option<f64> {
    let value = value.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let prefix = RE_NUMERIC_PREFIX.find(value)?;
    prefix.as_str().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(id: &str, name: &str, unit: &str, qty: &str) -> ItemSource {
        ItemSource {
            source_id: format!("src_{}", id),
            event_name: "Event".to_string(),
            station_id: "S1".to_string(),
            station_name: Some("Grill".to_string()),
            item_name_raw: name.to_string(),
            qty: qty.to_string(),
            unit: unit.to_string(),
        }
    }

    fn aggregate(sources: &[ItemSource]) -> Vec<AggregateGroup> {
        Aggregator::new(Collation::He).aggregate(sources)
    }

    #[test]
    fn test_sums_matching_items() {
        let groups = aggregate(&[
            source("1", "Onion", "kg", "2"),
            source("2", "Onion", "kg", "3"),
        ]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].item_name, "Onion");
        assert_eq!(groups[0].unit, "kg");
        assert_eq!(groups[0].total_quantity, "5");
        assert_eq!(groups[0].item_key, ident::item_id("Onion", "kg"));
        let ids: Vec<&str> = groups[0].source_ids().collect();
        assert_eq!(ids, vec!["src_1", "src_2"]);
    }

    #[test]
    fn test_units_never_merge() {
        let groups = aggregate(&[
            source("1", "Onion", "kg", "2"),
            source("2", "Onion", "unit", "3"),
        ]);
        assert_eq!(groups.len(), 2);
        assert_ne!(groups[0].item_key, groups[1].item_key);
    }

    #[test]
    fn test_grouping_trims_name_and_unit() {
        let groups = aggregate(&[
            source("1", " Onion", "kg ", "1"),
            source("2", "Onion ", " kg", "1.5"),
        ]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].total_quantity, "2.5");
    }

    #[test]
    fn test_zero_is_preserved() {
        let groups = aggregate(&[source("1", "Salt", "g", "0")]);
        assert_eq!(groups[0].total_quantity, "0");

        let groups = aggregate(&[source("1", "Salt", "g", "0"), source("2", "Salt", "g", "")]);
        assert_eq!(groups[0].total_quantity, "0");
    }

    #[test]
    fn test_empty_quantities_are_excluded() {
        let groups = aggregate(&[source("1", "Salt", "g", ""), source("2", "Salt", "g", "4")]);
        assert_eq!(groups[0].total_quantity, "4");

        let groups = aggregate(&[source("1", "Salt", "g", "")]);
        assert_eq!(groups[0].total_quantity, "");
    }

    #[test]
    fn test_mixed_quantities_keep_first_value() {
        let groups = aggregate(&[
            source("1", "Parsley", "bunch", ""),
            source("2", "Parsley", "bunch", "a few"),
            source("3", "Parsley", "bunch", "2"),
        ]);
        assert_eq!(groups[0].total_quantity, "a few");

        let groups = aggregate(&[
            source("1", "Parsley", "bunch", "kg 2"),
            source("2", "Parsley", "bunch", "2"),
        ]);
        assert_eq!(groups[0].total_quantity, "kg 2");
    }

    #[test]
    fn test_leading_number_is_summed() {
        let groups = aggregate(&[
            source("1", "Onion", "kg", "2 kg"),
            source("2", "Onion", "kg", "3"),
        ]);
        assert_eq!(groups[0].total_quantity, "5");

        let groups = aggregate(&[
            source("1", "Oil", "l", " 1.5e1x"),
            source("2", "Oil", "l", ".5"),
        ]);
        assert_eq!(groups[0].total_quantity, "15.5");
    }

    #[test]
    fn test_parse_quantity_prefix() {
        assert_eq!(parse_quantity("2 kg"), Some(2.0));
        assert_eq!(parse_quantity("  -3.25abc"), Some(-3.25));
        assert_eq!(parse_quantity("4."), Some(4.0));
        assert_eq!(parse_quantity("1e"), Some(1.0));
        assert_eq!(parse_quantity("2e-1 cups"), Some(0.2));
        assert_eq!(parse_quantity("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_quantity("a few"), None);
        assert_eq!(parse_quantity("-"), None);
        assert_eq!(parse_quantity("."), None);
        assert_eq!(parse_quantity("inf"), None);
    }

    #[test]
    fn test_members_keep_encounter_order() {
        let groups = aggregate(&[
            source("b", "Rice", "kg", "1"),
            source("x", "Oil", "l", "1"),
            source("a", "Rice", "kg", "1"),
        ]);
        let rice = groups.iter().find(|g| g.item_name == "Rice").unwrap();
        let ids: Vec<&str> = rice.source_ids().collect();
        assert_eq!(ids, vec!["src_b", "src_a"]);
    }

    #[test]
    fn test_sorted_by_name_then_unit() {
        let groups = aggregate(&[
            source("1", "תפוח", "kg", "1"),
            source("2", "בצל", "unit", "1"),
            source("3", "בצל", "kg", "1"),
            source("4", "אורז", "kg", "1"),
        ]);
        let order: Vec<(&str, &str)> = groups
            .iter()
            .map(|g| (g.item_name.as_str(), g.unit.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![("אורז", "kg"), ("בצל", "kg"), ("בצל", "unit"), ("תפוח", "kg")]
        );
    }

    #[test]
    fn test_output_is_independent_of_input_order() {
        let forward = vec![
            source("1", "Onion", "kg", "2"),
            source("2", "Garlic", "kg", "1"),
            source("3", "Beef", "kg", "5"),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        let keys = |groups: Vec<AggregateGroup>| -> Vec<String> {
            groups.into_iter().map(|g| g.item_key).collect()
        };
        assert_eq!(keys(aggregate(&forward)), keys(aggregate(&backward)));
    }
}
