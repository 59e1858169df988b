//! Type definitions as supplied by data models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use super::Value;

/// The option map of a type definition (`ctor`, `subof`, `doc`, `regex`, ...).
///
/// Immutable once accepted by the registry. Subtypes are built from a copy of
/// the parent's merged info with the child's own keys laid over it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeInfo(BTreeMap<String, Value>);

impl TypeInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// A present key whose value is `Null` counts as unset.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_int)
    }

    /// Flags are given as `1`, `true` or any truthy value.
    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key).is_some_and(Value::is_truthy)
    }

    pub fn ctor(&self) -> Option<&str> {
        self.get_str("ctor")
    }

    pub fn subof(&self) -> Option<&str> {
        self.get_str("subof")
    }

    /// Copy of `self` with every key from `child` overriding ours.
    pub fn overlay(&self, child: &TypeInfo) -> TypeInfo {
        let mut merged = self.0.clone();
        for (k, v) in &child.0 {
            merged.insert(k.clone(), v.clone());
        }
        TypeInfo(merged)
    }
}

/// One `(name, info)` type definition.
pub type TypeDef = (String, TypeInfo);

/// A data model's contribution: its type definitions in load order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default)]
    pub types: Vec<TypeDef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_child_wins() {
        let parent = TypeInfo::new().with("ctor", "int").with("min", 0).with("doc", "base");
        let child = TypeInfo::new().with("subof", "int").with("min", 10);
        let merged = parent.overlay(&child);

        assert_eq!(merged.get_int("min"), Some(10));
        assert_eq!(merged.get_str("doc"), Some("base"));
        assert_eq!(merged.subof(), Some("int"));
        assert_eq!(merged.ctor(), Some("int"));
    }

    #[test]
    fn test_flags() {
        let info = TypeInfo::new().with("lower", 1).with("strip", false).with("nullval", Value::Null);
        assert!(info.get_bool("lower"));
        assert!(!info.get_bool("strip"));
        assert!(!info.get_bool("missing"));
        assert!(info.get("nullval").is_none());
    }

    #[test]
    fn test_model_from_json() {
        let model: Model = serde_json::from_str(
            r#"{"types": [["foo:bar", {"subof": "str", "lower": 1}]]}"#,
        )
        .unwrap();
        assert_eq!(model.types.len(), 1);
        assert_eq!(model.types[0].0, "foo:bar");
        assert_eq!(model.types[0].1.subof(), Some("str"));
    }
}
