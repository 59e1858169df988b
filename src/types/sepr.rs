//! Separator type: several typed fields joined by a separator.
//!
//! `tcp4` with `sep=:`, `fields=ipv4,inet:ipv4|port,inet:port` turns
//! `1.2.3.4:80` into its canonical text with one sub-property per field.

use std::sync::OnceLock;

use crate::model::{Norm, PropertyMap, TypeInfo, Value};
use crate::model::property_map::insert_namespaced;
use crate::registry::TypeLib;
use crate::Result;
use super::fields::{Fields, parse_fields};
use super::{bad_info, bad_valu};

/// Options: `sep` (default `,`), `reverse`, and the field declarations.
#[derive(Debug)]
pub struct SeprType {
    name: String,
    sep: String,
    reverse: bool,
    info: TypeInfo,
    fields: OnceLock<Fields>,
}

impl SeprType {
    pub fn new(name: &str, info: &TypeInfo) -> Result<Self> {
        let sep = info.get_str("sep").unwrap_or(",");
        if sep.is_empty() {
            return Err(bad_info(name, "sep must not be empty"));
        }

        Ok(Self {
            name: name.to_owned(),
            sep: sep.to_owned(),
            reverse: info.get_bool("reverse"),
            info: info.clone(),
            fields: OnceLock::new(),
        })
    }

    /// Field declarations, parsed on first use.
    pub fn fields(&self) -> Result<&Fields> {
        if let Some(fields) = self.fields.get() {
            return Ok(fields);
        }
        let parsed = parse_fields(&self.name, &self.info)?;
        Ok(self.fields.get_or_init(|| parsed))
    }

    pub fn norm(&self, tlib: &TypeLib, valu: &Value) -> Result<Norm> {
        let fields = self.fields()?;

        let parts: Vec<Value> = match valu {
            Value::String(text) => self.split(text, fields.len())?,
            Value::List(items) if items.len() == fields.len() => items.clone(),
            Value::List(items) => {
                return Err(bad_valu(
                    &self.name,
                    valu,
                    format!("expected {} fields, got {}", fields.len(), items.len()),
                ));
            }
            _ => return Err(bad_valu(&self.name, valu, "expected a string or list")),
        };

        let mut subs = PropertyMap::new();
        let mut reprs = Vec::with_capacity(fields.len());

        for (part, field) in parts.iter().zip(fields) {
            // a field typed as this very type is a literal segment
            let (norm, fubs) = if field.type_name == self.name {
                reprs.push(part.to_string());
                (part.clone(), PropertyMap::new())
            } else {
                let ftype = tlib.req_type(&field.type_name)?;
                let (norm, fubs) = ftype.norm(tlib, part, None)?;
                reprs.push(ftype.repr(&norm)?);
                (norm, fubs)
            };
            insert_namespaced(&mut subs, &field.name, &norm, fubs);
        }

        Ok((Value::String(reprs.join(&self.sep)), subs))
    }

    /// Split into exactly `count` parts. The last part (first, with
    /// `reverse`) absorbs any extra separators.
    fn split(&self, text: &str, count: usize) -> Result<Vec<Value>> {
        let mut parts: Vec<&str> = if self.reverse {
            text.rsplitn(count.max(1), self.sep.as_str()).collect()
        } else {
            text.splitn(count.max(1), self.sep.as_str()).collect()
        };
        if self.reverse {
            parts.reverse();
        }

        if parts.len() != count {
            return Err(bad_valu(
                &self.name,
                &Value::from(text),
                format!("split on {:?}: {} parts, {} fields", self.sep, parts.len(), count),
            ));
        }

        Ok(parts.into_iter().map(Value::from).collect())
    }
}
