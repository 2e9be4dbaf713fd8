use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Labels;
use crate::error::EventError;
use crate::ident;

use super::document::{non_empty_text, EventDocument};

/// One ingredient line, normalized and tied to its originating station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSource {
    pub source_id: String,
    pub event_name: String,
    pub station_id: String,
    /// `None` when the station id has no entry in `stations[]`.
    pub station_name: Option<String>,
    pub item_name_raw: String,
    /// Empty string means no quantity was given; `"0"` is a real zero.
    pub qty: String,
    pub unit: String,
}

/// Flattens an [`EventDocument`] into [`ItemSource`] records.
pub struct EventParser {
    unnamed_event: String,
    unnamed_item: String,
}

impl EventParser {
    pub fn new(labels: &Labels) -> Self {
        Self {
            unnamed_event: labels.unnamed_event.clone(),
            unnamed_item: labels.unnamed_item.clone(),
        }
    }

    /// Produces one record per ingredient, in document order.
    ///
    /// Fails with [`EventError::MissingRequiredField`] when the document has
    /// no `eventId` or any ingredient has no `ingredientId`; both seed the
    /// source identifier.
    pub fn parse(&self, document: &EventDocument) -> Result<Vec<ItemSource>, EventError> {
        let event_id =
            non_empty_text(document.event_id()).ok_or(EventError::MissingRequiredField {
                field: "eventId",
                index: None,
            })?;

        let event_name =
            non_empty_text(document.event_name()).unwrap_or_else(|| self.unnamed_event.clone());

        let stations = station_names(document);

        let mut sources = Vec::with_capacity(document.ingredients().len());
        for (index, ingredient) in document.ingredients().iter().enumerate() {
            let ingredient_id = non_empty_text(ingredient.ingredient_id.as_ref()).ok_or(
                EventError::MissingRequiredField {
                    field: "ingredientId",
                    index: Some(index),
                },
            )?;

            let station_id = ingredient.station_ref();

            let station_name = stations.get(&station_id).cloned();
            if station_name.is_none() {
                warn!(
                    station_id = %station_id,
                    index,
                    "Ingredient refers to a station with no name"
                );
            }

            let item_name_raw = non_empty_text(ingredient.ingredient_name.as_ref())
                .unwrap_or_else(|| self.unnamed_item.clone());

            // Absent or null becomes empty; an explicit 0 stays "0".
            let qty = ingredient
                .quantity
                .as_ref()
                .map(|q| q.to_string())
                .unwrap_or_default();

            let unit = non_empty_text(ingredient.unit.as_ref()).unwrap_or_default();

            sources.push(ItemSource {
                source_id: ident::source_id(&event_id, &station_id, &ingredient_id),
                event_name: event_name.clone(),
                station_id,
                station_name,
                item_name_raw,
                qty,
                unit,
            });
        }

        debug!(
            event_id = %event_id,
            sources = sources.len(),
            stations = stations.len(),
            "Parsed event document"
        );
        Ok(sources)
    }
}

/// Station id → name, keyed by the text form of the id so `7` and `"7"`
/// refer to the same station. Entries missing either field are skipped.
fn station_names(document: &EventDocument) -> HashMap<String, String> {
    document
        .stations()
        .iter()
        .filter_map(|station| {
            let id = non_empty_text(station.station_id.as_ref())?;
            let name = non_empty_text(station.station_name.as_ref())?;
            Some((id, name))
        })
        .collect()
}
