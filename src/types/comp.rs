//! Composite type: a content-addressed guid over normalized fields.
//!
//! Accepted inputs:
//!
//! - an existing guid string
//! - a list literal: `(woot.com, 80, time=20160101)`
//! - a list value: required fields in order, then `(name, valu)` pairs
//!   for optional fields, in any order
//!
//! The guid is taken over the required norms followed by `(name, norm)`
//! for each present optional field, in alphabetical field order, so the
//! order optional pairs were supplied in never changes the result.

use std::collections::HashMap;

use crate::model::{Norm, PropertyMap, TypeInfo, Value};
use crate::model::property_map::insert_namespaced;
use crate::registry::TypeLib;
use crate::syntax::parse_list;
use crate::{Error, Result};
use super::fields::{Fields, parse_field_str, parse_fields};
use super::{bad_valu, guid_of};

/// Options: `fields` (required, ordered), `optfields` (optional).
#[derive(Debug)]
pub struct CompType {
    name: String,
    fields: Fields,
    optfields: Fields,
}

impl CompType {
    pub fn new(name: &str, info: &TypeInfo) -> Result<Self> {
        let fields = parse_fields(name, info)?;

        let mut optfields = match info.get_str("optfields") {
            Some(ostr) => parse_field_str(name, "optfields", ostr)?,
            None => Fields::new(),
        };
        optfields.sort();

        Ok(Self { name: name.to_owned(), fields, optfields })
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Optional fields, alphabetically ordered.
    pub fn optfields(&self) -> &Fields {
        &self.optfields
    }

    pub fn norm(&self, tlib: &TypeLib, valu: &Value) -> Result<Norm> {
        match valu {
            Value::String(text) => self.norm_str(tlib, valu, text),
            Value::List(items) => self.norm_list(tlib, valu, items),
            _ => Err(bad_valu(&self.name, valu, "expected guid or list")),
        }
    }

    fn norm_str(&self, tlib: &TypeLib, valu: &Value, text: &str) -> Result<Norm> {
        let text = text.trim();
        if text.is_empty() {
            return Err(bad_valu(&self.name, valu, "empty composite value"));
        }

        if !text.starts_with('(') {
            return tlib.type_norm("guid", &Value::from(text), None);
        }

        let (items, off) = parse_list(text, 0).map_err(|e| match e {
            Error::BadSyntax { position, message } => {
                bad_valu(&self.name, valu, format!("at {position}: {message}"))
            }
            other => other,
        })?;
        if off != text.len() {
            return Err(bad_valu(&self.name, valu, format!("trailing text after list at {off}")));
        }

        self.norm_list(tlib, valu, &items)
    }

    fn norm_list(&self, tlib: &TypeLib, valu: &Value, items: &[Value]) -> Result<Norm> {
        let fsize = self.fields.len();
        if items.len() < fsize {
            return Err(bad_valu(
                &self.name,
                valu,
                format!("expected {} fields and got {}", fsize, items.len()),
            ));
        }

        let mut opts: HashMap<&str, &Value> = HashMap::new();
        for item in &items[fsize..] {
            match item.as_list() {
                Some([Value::String(k), v]) => { opts.insert(k.as_str(), v); }
                _ => return Err(bad_valu(&self.name, item, "optional fields must be (name, valu) pairs")),
            }
        }

        let mut subs = PropertyMap::new();
        let mut retn = Vec::with_capacity(fsize + opts.len());

        for (v, field) in items[..fsize].iter().zip(&self.fields) {
            let (norm, fubs) = tlib.type_norm(&field.type_name, v, None)?;
            insert_namespaced(&mut subs, &field.name, &norm, fubs);
            retn.push(norm);
        }

        for field in &self.optfields {
            let Some(v) = opts.get(field.name.as_str()).filter(|v| !v.is_null()) else {
                continue;
            };
            let (norm, fubs) = tlib.type_norm(&field.type_name, v, None)?;
            insert_namespaced(&mut subs, &field.name, &norm, fubs);
            retn.push(Value::List(vec![Value::from(field.name.as_str()), norm]));
        }

        Ok((Value::String(guid_of(&Value::List(retn))?), subs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::is_guid;

    fn tlib() -> TypeLib {
        let tlib = TypeLib::new();
        tlib.add_type(
            "foo:comp",
            TypeInfo::new()
                .with("subof", "comp")
                .with("fields", "fqdn=str:lwr,port=int")
                .with("optfields", "time=time,desc=str"),
        )
        .unwrap();
        tlib
    }

    #[test]
    fn test_optfields_sorted() {
        let t = CompType::new("x", &TypeInfo::new().with("optfields", "zz=str,aa=int")).unwrap();
        let names: Vec<_> = t.optfields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["aa", "zz"]);
    }

    #[test]
    fn test_list_value() {
        let tlib = tlib();
        let (iden, subs) = tlib
            .type_norm("foo:comp", &Value::from(vec![Value::from("WOOT.com"), Value::from("0x50")]), None)
            .unwrap();
        assert!(is_guid(iden.as_str().unwrap()));
        assert_eq!(subs.get("fqdn"), Some(&Value::from("woot.com")));
        assert_eq!(subs.get("port"), Some(&Value::Int(80)));
    }

    #[test]
    fn test_literal_equals_list() {
        let tlib = tlib();
        let from_text = tlib.type_norm("foo:comp", &Value::from("(woot.com, 80, desc=\"hi there\")"), None).unwrap();
        let from_list = tlib
            .type_norm(
                "foo:comp",
                &Value::from(vec![Value::from("woot.com"), Value::Int(80), Value::from(("desc", "hi there"))]),
                None,
            )
            .unwrap();
        assert_eq!(from_text.0, from_list.0);
        assert_eq!(from_text.1.get("desc"), Some(&Value::from("hi there")));
    }

    #[test]
    fn test_guid_passthrough() {
        let tlib = tlib();
        let iden = "AB".repeat(16);
        assert_eq!(
            tlib.type_norm("foo:comp", &Value::from(iden), None).unwrap().0,
            Value::from("ab".repeat(16))
        );
    }

    #[test]
    fn test_rejects() {
        let tlib = tlib();
        for bad in ["", "   ", "(woot.com)", "(woot.com, 80) junk", "(woot.com, 80, nope)", "(woot.com, 80"] {
            assert!(tlib.type_norm("foo:comp", &Value::from(bad), None).is_err(), "{bad:?}");
        }
        assert!(tlib.type_norm("foo:comp", &Value::Int(3), None).is_err());
    }

    #[test]
    fn test_deep_nesting_is_bad_value() {
        let tlib = tlib();
        let deep = format!("{}{}", "(".repeat(200_000), ")".repeat(200_000));
        assert!(matches!(
            tlib.type_norm("foo:comp", &Value::from(deep), None),
            Err(Error::BadValue { .. })
        ));
    }
}
