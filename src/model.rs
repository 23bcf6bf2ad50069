//! Vehicle records and their decoding from store documents.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A rentable vehicle as shown on the page.
///
/// Loaded once per visit and never patched; a refetch replaces the whole set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub model: String,
    pub fuel: String,
    pub transmission: String,
    pub year: u32,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Why a single document could not be turned into a [`Vehicle`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("document has no name")]
    MissingName,

    #[error("document '{id}' is missing field '{field}'")]
    MissingField { id: String, field: &'static str },

    #[error("document '{id}' field '{field}' has unexpected type")]
    WrongType { id: String, field: &'static str },
}

/// A document as returned by the Firestore REST API.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    /// Full resource path; the id is the last segment.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: HashMap<String, Value>,
}

impl Document {
    pub fn id(&self) -> Option<&str> {
        self.name.rsplit('/').next().filter(|segment| !segment.is_empty())
    }
}

impl TryFrom<Document> for Vehicle {
    type Error = DecodeError;

    fn try_from(doc: Document) -> Result<Self, Self::Error> {
        let id = doc.id().ok_or(DecodeError::MissingName)?.to_string();
        let text = |field: &'static str| string_field(&doc.fields, &id, field);

        Ok(Vehicle {
            model: text("model")?,
            fuel: text("fuel")?,
            transmission: text("transmission")?,
            image_url: text("imageUrl")?,
            year: year_field(&doc.fields, &id)?,
            id,
        })
    }
}

fn lookup<'a>(
    fields: &'a HashMap<String, Value>,
    id: &str,
    field: &'static str,
) -> Result<&'a Value, DecodeError> {
    fields.get(field).ok_or_else(|| DecodeError::MissingField {
        id: id.to_string(),
        field,
    })
}

fn string_field(
    fields: &HashMap<String, Value>,
    id: &str,
    field: &'static str,
) -> Result<String, DecodeError> {
    lookup(fields, id, field)?
        .get("stringValue")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| DecodeError::WrongType {
            id: id.to_string(),
            field,
        })
}

// Firestore encodes 64-bit integers as decimal strings.
fn year_field(fields: &HashMap<String, Value>, id: &str) -> Result<u32, DecodeError> {
    let value = lookup(fields, id, "year")?;
    let wrong_type = || DecodeError::WrongType {
        id: id.to_string(),
        field: "year",
    };

    if let Some(raw) = value.get("integerValue") {
        let parsed = match raw {
            Value::String(s) => s.parse::<u32>().ok(),
            Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
            _ => None,
        };
        return parsed.ok_or_else(wrong_type);
    }

    if let Some(raw) = value.get("doubleValue").and_then(Value::as_f64) {
        if raw.is_finite() && raw >= 0.0 && raw.fract() == 0.0 && raw <= f64::from(u32::MAX) {
            return Ok(raw as u32);
        }
    }

    Err(wrong_type())
}
