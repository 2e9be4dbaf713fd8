//! Builders for event documents.

#![allow(dead_code)]

use serde_json::{json, Map, Value};

/// Builder for event document JSON.
pub struct EventBuilder {
    event_id: Option<Value>,
    event_name: Option<String>,
    nested: bool,
    stations: Vec<Value>,
    ingredients: Vec<Value>,
}

impl EventBuilder {
    /// Create a builder for an event with the given id.
    pub fn new(event_id: &str) -> Self {
        Self {
            event_id: Some(json!(event_id)),
            event_name: None,
            nested: false,
            stations: Vec::new(),
            ingredients: Vec::new(),
        }
    }

    /// Create a builder for a document with no event id at all.
    pub fn without_event_id() -> Self {
        Self {
            event_id: None,
            ..Self::new("")
        }
    }

    /// Set the event name.
    pub fn name(mut self, name: &str) -> Self {
        self.event_name = Some(name.to_string());
        self
    }

    /// Put event metadata in a nested `event` object.
    pub fn nested(mut self) -> Self {
        self.nested = true;
        self
    }

    /// Add a station.
    pub fn station(mut self, id: impl Into<Value>, name: &str) -> Self {
        self.stations
            .push(json!({ "stationId": id.into(), "stationName": name }));
        self
    }

    /// Add an ingredient line.
    pub fn ingredient(mut self, ingredient: IngredientBuilder) -> Self {
        self.ingredients.push(ingredient.build());
        self
    }

    pub fn build(self) -> Value {
        let mut doc = Map::new();
        let mut meta = Map::new();
        if let Some(id) = self.event_id {
            meta.insert("eventId".to_string(), id);
        }
        if let Some(name) = self.event_name {
            meta.insert("eventName".to_string(), json!(name));
        }

        if self.nested {
            doc.insert("event".to_string(), Value::Object(meta));
        } else {
            doc.extend(meta);
        }
        doc.insert("stations".to_string(), Value::Array(self.stations));
        doc.insert("ingredients".to_string(), Value::Array(self.ingredients));
        Value::Object(doc)
    }

    pub fn to_json(self) -> String {
        serde_json::to_string_pretty(&self.build()).unwrap()
    }
}

/// Builder for one ingredient line.
pub struct IngredientBuilder {
    fields: Map<String, Value>,
}

impl IngredientBuilder {
    pub fn new(ingredient_id: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("ingredientId".to_string(), json!(ingredient_id));
        Self { fields }
    }

    /// An ingredient with no `ingredientId` field.
    pub fn without_id() -> Self {
        Self { fields: Map::new() }
    }

    pub fn name(self, name: &str) -> Self {
        self.field("ingredientName", json!(name))
    }

    pub fn station(self, station_id: impl Into<Value>) -> Self {
        self.field("stationId", station_id.into())
    }

    pub fn quantity(self, quantity: impl Into<Value>) -> Self {
        self.field("quantity", quantity.into())
    }

    pub fn unit(self, unit: &str) -> Self {
        self.field("unit", json!(unit))
    }

    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

/// Shorthand for a fully populated ingredient.
pub fn ingredient(id: &str, name: &str, quantity: impl Into<Value>, unit: &str, station: &str) -> IngredientBuilder {
    IngredientBuilder::new(id)
        .name(name)
        .quantity(quantity)
        .unit(unit)
        .station(station)
}
