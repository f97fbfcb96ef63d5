//! Declarative wire schemas
//!
//! Wire key names live in static tables instead of serde attributes on the
//! types. [`decode`] rewrites a JSON document from wire names to field names
//! before handing it to serde, and [`encode`] does the reverse.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::domain::result::{Error, Result};

/// One wire-name / field-name pair
#[derive(Debug)]
pub struct Field {
    pub wire: &'static str,
    pub name: &'static str,
    /// Schema applied to the value (or to each element when it is an array)
    pub nested: Option<&'static Schema>,
}

impl Field {
    pub const fn new(wire: &'static str, name: &'static str) -> Self {
        Self {
            wire,
            name,
            nested: None,
        }
    }

    pub const fn nested(wire: &'static str, name: &'static str, schema: &'static Schema) -> Self {
        Self {
            wire,
            name,
            nested: Some(schema),
        }
    }
}

/// Field table for one JSON object shape
#[derive(Debug)]
pub struct Schema {
    /// Human-readable name used in error messages
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl Schema {
    pub const fn new(name: &'static str, fields: &'static [Field]) -> Self {
        Self { name, fields }
    }

    pub fn field_for_wire(&self, wire: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.wire == wire)
    }

    pub fn field_for_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    ToFields,
    ToWire,
}

fn rename(value: JsonValue, schema: &Schema, direction: Direction) -> Result<JsonValue> {
    let JsonValue::Object(source) = value else {
        return Err(Error::decode(format!(
            "expected a JSON object for {}",
            schema.name
        )));
    };

    let mut renamed = Map::with_capacity(schema.fields.len());
    for (key, value) in source {
        let field = match direction {
            Direction::ToFields => schema.field_for_wire(&key),
            Direction::ToWire => schema.field_for_name(&key),
        };
        // Keys without a table entry are dropped
        let Some(field) = field else {
            continue;
        };

        let target = match direction {
            Direction::ToFields => field.name,
            Direction::ToWire => field.wire,
        };
        let value = match field.nested {
            Some(nested) => rename_nested(value, nested, direction)?,
            None => value,
        };
        renamed.insert(target.to_string(), value);
    }

    Ok(JsonValue::Object(renamed))
}

fn rename_nested(value: JsonValue, schema: &Schema, direction: Direction) -> Result<JsonValue> {
    match value {
        JsonValue::Array(items) => items
            .into_iter()
            .map(|item| rename(item, schema, direction))
            .collect::<Result<Vec<_>>>()
            .map(JsonValue::Array),
        JsonValue::Null => Ok(JsonValue::Null),
        other => rename(other, schema, direction),
    }
}

/// Decode a wire JSON value into `T` using `schema` for key names
pub fn decode<T: DeserializeOwned>(value: JsonValue, schema: &Schema) -> Result<T> {
    let renamed = rename(value, schema, Direction::ToFields)?;
    serde_json::from_value(renamed)
        .map_err(|e| Error::decode(format!("invalid {}: {}", schema.name, e)))
}

/// Parse raw bytes as JSON, then [`decode`]
pub fn decode_slice<T: DeserializeOwned>(bytes: &[u8], schema: &Schema) -> Result<T> {
    let value: JsonValue = serde_json::from_slice(bytes)
        .map_err(|e| Error::decode(format!("malformed {} JSON: {}", schema.name, e)))?;
    decode(value, schema)
}

/// Encode `value` as wire JSON using `schema` for key names
pub fn encode<T: Serialize>(value: &T, schema: &Schema) -> Result<JsonValue> {
    let value = serde_json::to_value(value)?;
    rename(value, schema, Direction::ToWire)
}
