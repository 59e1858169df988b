//! Record returned by the host's alias lookup.

use serde::{Deserialize, Serialize};
use super::{PropertyMap, Value};

/// A stored record as seen by the type library.
///
/// `form` names the property that holds the record's primary identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub form: String,
    pub properties: PropertyMap,
}

impl Record {
    pub fn new(form: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            properties: PropertyMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// The primary identifier: the value of the property named by `form`.
    pub fn iden(&self) -> Option<&Value> {
        self.properties.get(&self.form)
    }
}

/// Host capability: find an existing record whose `prop` equals `valu`.
///
/// Implementations may block (they usually hit storage).
pub trait AliasResolver: Send + Sync {
    fn lookup_by_alias(&self, prop: &str, valu: &str) -> Option<Record>;
}

impl<F> AliasResolver for F
where
    F: Fn(&str, &str) -> Option<Record> + Send + Sync,
{
    fn lookup_by_alias(&self, prop: &str, valu: &str) -> Option<Record> {
        self(prop, valu)
    }
}
