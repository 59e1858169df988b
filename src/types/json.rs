//! JSON type, stored as canonical compact text.
//!
//! Object keys come out sorted and with no whitespace, so any two
//! JSON-equivalent inputs normalize to the same string.

use crate::model::{Norm, PropertyMap, Value};
use crate::Result;
use super::bad_valu;

#[derive(Debug)]
pub struct JsonType {
    name: String,
}

impl JsonType {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_owned() }
    }

    pub fn norm(&self, valu: &Value) -> Result<Norm> {
        let parsed: serde_json::Value = match valu {
            Value::String(text) => serde_json::from_str(text)
                .map_err(|e| bad_valu(&self.name, valu, format!("invalid json: {e}")))?,
            other if has_non_finite(other) => {
                return Err(bad_valu(&self.name, valu, "NaN and infinity have no json form"));
            }
            other => serde_json::to_value(other)
                .map_err(|e| bad_valu(&self.name, valu, format!("not serializable: {e}")))?,
        };
        Ok((Value::String(parsed.to_string()), PropertyMap::new()))
    }
}

fn has_non_finite(valu: &Value) -> bool {
    match valu {
        Value::Float(f) => !f.is_finite(),
        Value::List(items) => items.iter().any(has_non_finite),
        Value::Map(map) => map.values().any(has_non_finite),
        _ => false,
    }
}
