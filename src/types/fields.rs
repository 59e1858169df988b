//! Field declarations shared by the multi-field types.
//!
//! Three spellings are accepted:
//!
//! ```text
//! fields=fqdn,inet:fqdn|port,inet:port     (legacy)
//! fields=fqdn=inet:fqdn,port=inet:port
//! names=fqdn,port  types=inet:fqdn,inet:port
//! ```

use smallvec::SmallVec;

use crate::model::TypeInfo;
use crate::Result;
use super::bad_info;

/// One declared field: its name and the name of its type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Field {
    pub name: String,
    pub type_name: String,
}

impl Field {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self { name: name.into(), type_name: type_name.into() }
    }
}

pub type Fields = SmallVec<[Field; 4]>;

/// Parse the field declarations of type `owner` from `fields=` or
/// `names=`/`types=`.
pub fn parse_fields(owner: &str, info: &TypeInfo) -> Result<Fields> {
    if let Some(fstr) = info.get_str("fields") {
        return parse_field_str(owner, "fields", fstr);
    }

    let names = split_list(info.get_str("names").unwrap_or_default());
    let types = split_list(info.get_str("types").unwrap_or_default());

    if names.len() != types.len() {
        return Err(bad_info(
            owner,
            format!("len(names) {} != len(types) {}", names.len(), types.len()),
        ));
    }

    Ok(names.into_iter().zip(types).map(|(n, t)| Field::new(n, t)).collect())
}

/// Parse either pair syntax: `a=t1,b=t2` or legacy `a,t1|b,t2`.
pub fn parse_field_str(owner: &str, key: &str, fstr: &str) -> Result<Fields> {
    if fstr.trim().is_empty() {
        return Ok(Fields::new());
    }

    let (sep0, sep1) = if fstr.contains('=') { (',', '=') } else { ('|', ',') };

    fstr.split(sep0)
        .map(|part| {
            let mut kv = part.split(sep1);
            match (kv.next(), kv.next(), kv.next()) {
                (Some(name), Some(ftype), None) if !name.trim().is_empty() && !ftype.trim().is_empty() => {
                    Ok(Field::new(name.trim(), ftype.trim()))
                }
                _ => Err(bad_info(owner, format!("{key}: malformed field declaration {part:?}"))),
            }
        })
        .collect()
}

fn split_list(text: &str) -> Vec<&str> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.split(',').map(str::trim).collect()
    }
}
