//! Recursive rewrite of record graphs.

use mediagate_core::ConversionError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::converter::{ConvertOptions, UrlConverter};

impl UrlConverter {
    /// Return a copy of `value` with every eligible string leaf rewritten.
    ///
    /// Only strings that pass [`needs_conversion`](Self::needs_conversion)
    /// are rewritten, contact card fields included. Arrays are walked element by element. Object fields accepted by the
    /// contact card predicate are walked with `is_vcard` set for their whole
    /// subtree. Numbers, booleans and null are copied as they are.
    pub fn convert_graph(&self, value: &Value, options: ConvertOptions) -> Value {
        match value {
            Value::String(s) if self.needs_conversion(s) => Value::String(self.convert(s, options)),
            Value::String(_) => value.clone(),
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.convert_graph(item, options))
                    .collect(),
            ),
            Value::Object(fields) => {
                let mut converted = Map::with_capacity(fields.len());
                for (key, field) in fields {
                    let field_options = if self.is_vcard_field(key) {
                        options.with_vcard(true)
                    } else {
                        options
                    };
                    converted.insert(key.clone(), self.convert_graph(field, field_options));
                }
                Value::Object(converted)
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
        }
    }

    /// Rewrite the storage URLs held by any serde record.
    ///
    /// The record is serialized to JSON, walked with
    /// [`convert_graph`](Self::convert_graph) and deserialized back.
    pub fn convert_record<T>(&self, record: &T, options: ConvertOptions) -> Result<T, ConversionError>
    where
        T: Serialize + DeserializeOwned,
    {
        let value = serde_json::to_value(record)?;
        let converted = self.convert_graph(&value, options);
        Ok(serde_json::from_value(converted)?)
    }
}
