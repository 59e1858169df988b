//! PropertyMap: the derived sub-properties emitted alongside a normalized value.

use std::collections::HashMap;
use super::Value;

/// A map of sub-property names to values.
pub type PropertyMap = HashMap<String, Value>;

/// A normalized value paired with its derived sub-properties.
pub type Norm = (Value, PropertyMap);

/// Record `name = norm` plus every field-level sub-property as `name:subkey`.
pub(crate) fn insert_namespaced(subs: &mut PropertyMap, name: &str, norm: &Value, fubs: PropertyMap) {
    subs.insert(name.to_owned(), norm.clone());
    for (subk, subv) in fubs {
        subs.insert(format!("{name}:{subk}"), subv);
    }
}
