//! Cross-reference type: links a known source to a value of any type.
//!
//! ```text
//! add_type("foo:barrefs", subof=xref, source=bar,foo:bar)
//! norm("foo:barrefs", "<bar>|inet:fqdn|woot.com")
//!   → guid, { bar: .., xtype: inet:fqdn, xref:inet:fqdn: woot.com }
//! ```

use crate::model::{Norm, PropertyMap, TypeInfo, Value};
use crate::registry::TypeLib;
use crate::Result;
use super::{bad_info, bad_valu, guid_of};

/// Options: `source=<name>,<type>`.
#[derive(Debug)]
pub struct XrefType {
    name: String,
    source: Option<(String, String)>,
}

impl XrefType {
    pub fn new(name: &str, info: &TypeInfo) -> Result<Self> {
        let source = match info.get_str("source") {
            Some(sorc) => match sorc.split(',').collect::<Vec<_>>().as_slice() {
                [sname, stype] => Some((sname.trim().to_owned(), stype.trim().to_owned())),
                _ => return Err(bad_info(name, format!("expected source=<name>,<type>, got {sorc:?}"))),
            },
            None => None,
        };
        Ok(Self { name: name.to_owned(), source })
    }

    pub fn norm(&self, tlib: &TypeLib, valu: &Value) -> Result<Norm> {
        match valu {
            Value::String(text) if text.chars().count() == 32 && !text.contains('|') => {
                tlib.type_norm("guid", valu, None)
            }
            Value::String(text) => {
                let parts: Vec<Value> = text.split('|').map(Value::from).collect();
                self.norm_parts(tlib, valu, &parts)
            }
            Value::List(items) => self.norm_parts(tlib, valu, items),
            _ => Err(bad_valu(&self.name, valu, "expected guid, psv, or list")),
        }
    }

    fn norm_parts(&self, tlib: &TypeLib, valu: &Value, parts: &[Value]) -> Result<Norm> {
        let [sval, tstr, tval] = parts else {
            return Err(bad_valu(&self.name, valu, "xref type requires 3 fields"));
        };

        let Some((sname, stype)) = &self.source else {
            return Err(bad_info(&self.name, "xref type requires source=<name>,<type>"));
        };

        let Some(tname) = tstr.as_str() else {
            return Err(bad_valu(&self.name, valu, "xref target type must be a type name"));
        };

        let (snorm, _) = tlib.type_norm(stype, sval, None)?;
        let (tnorm, _) = tlib.type_norm(tname, tval, None)?;

        let iden = guid_of(&Value::List(vec![snorm.clone(), Value::from(tname), tnorm.clone()]))?;

        let mut subs = PropertyMap::new();
        subs.insert(sname.clone(), snorm);
        subs.insert("xtype".into(), Value::from(tname));
        subs.insert(format!("xref:{tname}"), tnorm);

        Ok((Value::String(iden), subs))
    }
}
