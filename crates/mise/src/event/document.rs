//! Input shape of an event file.
//!
//! Identifier and quantity fields may arrive as JSON strings or numbers, so
//! they are held as [`Scalar`] and rendered to text at parse time. Objects
//! or arrays in those positions are rejected when the document is decoded.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::EventError;

/// A JSON scalar used where the source format allows either text or numbers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl Scalar {
    /// True for the empty string only; numeric zero is a real value.
    pub fn is_empty(&self) -> bool {
        matches!(self, Scalar::Text(s) if s.is_empty())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
                (Some(i), _, _) => write!(f, "{}", i),
                (_, Some(u), _) => write!(f, "{}", u),
                (_, _, Some(x)) => f.write_str(&format_number(x)),
                _ => write!(f, "{}", n),
            },
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value.into())
    }
}

/// Renders a number the way ECMAScript `Number::toString` does: no trailing
/// `.0` for integral values, `-0` as `"0"`, and exponent notation
/// (`1e+21`, `1e-7`) outside `[1e-6, 1e21)`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }

    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

/// Renders an optional scalar, treating absent and empty as `None`.
pub(crate) fn non_empty_text(value: Option<&Scalar>) -> Option<String> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInfo {
    #[serde(default)]
    pub event_id: Option<Scalar>,
    #[serde(default)]
    pub event_name: Option<Scalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    #[serde(default)]
    pub station_id: Option<Scalar>,
    #[serde(default)]
    pub station_name: Option<Scalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(default)]
    pub ingredient_id: Option<Scalar>,
    /// `None` when the field is missing, `Some(None)` for an explicit `null`.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub station_id: Option<Option<Scalar>>,
    #[serde(default)]
    pub ingredient_name: Option<Scalar>,
    #[serde(default)]
    pub quantity: Option<Scalar>,
    #[serde(default)]
    pub unit: Option<Scalar>,
}

impl Ingredient {
    /// Text form of the station reference. A missing field renders as
    /// `undefined` and an explicit `null` as `null`, which keeps source ids
    /// identical to those already stored by earlier reports.
    pub fn station_ref(&self) -> String {
        match &self.station_id {
            None => "undefined".to_string(),
            Some(None) => "null".to_string(),
            Some(Some(id)) => id.to_string(),
        }
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<Scalar>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Scalar>::deserialize(deserializer).map(Some)
}

/// Top-level event document.
///
/// Event metadata is accepted either in a nested `event` object or as
/// top-level `eventId`/`eventName` fields; the nested object wins.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDocument {
    #[serde(default)]
    pub event: Option<EventInfo>,
    #[serde(default)]
    pub event_id: Option<Scalar>,
    #[serde(default)]
    pub event_name: Option<Scalar>,
    #[serde(default)]
    pub stations: Option<Vec<Station>>,
    #[serde(default)]
    pub ingredients: Option<Vec<Ingredient>>,
}

impl EventDocument {
    pub fn event_id(&self) -> Option<&Scalar> {
        self.event
            .as_ref()
            .and_then(|e| e.event_id.as_ref())
            .or(self.event_id.as_ref())
    }

    pub fn event_name(&self) -> Option<&Scalar> {
        self.event
            .as_ref()
            .and_then(|e| e.event_name.as_ref())
            .or(self.event_name.as_ref())
    }

    pub fn stations(&self) -> &[Station] {
        self.stations.as_deref().unwrap_or_default()
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        self.ingredients.as_deref().unwrap_or_default()
    }
}

/// Decodes raw file bytes as UTF-8 JSON into an [`EventDocument`].
///
/// `file_name` and `file_id` are only used to label errors.
pub fn decode_event_document(
    content: &[u8],
    file_name: &str,
    file_id: &str,
) -> Result<EventDocument, EventError> {
    let text = std::str::from_utf8(content).map_err(|_| EventError::InvalidEncoding {
        file_name: file_name.to_string(),
        file_id: file_id.to_string(),
    })?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    serde_json::from_str(text).map_err(|e| EventError::MalformedJson {
        file_name: file_name.to_string(),
        file_id: file_id.to_string(),
        source: e,
    })
}
