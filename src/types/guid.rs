//! Guid type and identifier generation.
//!
//! A guid is 32 lowercase hex characters. Accepted inputs:
//!
//! - a literal (any case, hyphens ignored)
//! - `*`, which generates a fresh random guid
//! - `$<valu>`, resolved through the host's alias lookup on the type's
//!   `alias=` property

use sha2::{Digest, Sha256};

use crate::model::{Norm, PropertyMap, TypeInfo, Value};
use crate::registry::TypeLib;
use crate::Result;
use super::bad_valu;

/// Options: `alias`.
#[derive(Debug)]
pub struct GuidType {
    name: String,
    alias: Option<String>,
}

impl GuidType {
    pub fn new(name: &str, info: &TypeInfo) -> Self {
        Self {
            name: name.to_owned(),
            alias: info.get_str("alias").map(str::to_owned),
        }
    }

    pub fn norm(&self, tlib: &TypeLib, valu: &Value) -> Result<Norm> {
        let text = match valu {
            Value::String(s) if !s.is_empty() => s.as_str(),
            _ => return Err(bad_valu(&self.name, valu, "expected a non-empty string")),
        };

        if text == "*" {
            return Ok((Value::String(guid()), PropertyMap::new()));
        }

        let Some(alias_valu) = text.strip_prefix('$') else {
            let iden = text.to_lowercase().replace('-', "");
            if !is_guid(&iden) {
                return Err(bad_valu(&self.name, valu, "not a 32 character hex guid"));
            }
            return Ok((Value::String(iden), PropertyMap::new()));
        };

        let Some(alias) = &self.alias else {
            return Err(bad_valu(&self.name, valu, "guid resolver syntax used with non-aliased guid"));
        };

        let Some(resolver) = tlib.alias_resolver() else {
            return Err(bad_valu(&self.name, valu, "guid resolver syntax used without an alias resolver"));
        };

        let record = resolver
            .lookup_by_alias(alias, alias_valu)
            .ok_or_else(|| bad_valu(&self.name, valu, "no result for guid resolver"))?;

        match record.iden() {
            Some(Value::String(iden)) => Ok((Value::String(iden.clone()), PropertyMap::new())),
            _ => Err(bad_valu(&self.name, valu, "resolved record has no primary identifier")),
        }
    }
}

pub fn is_guid(text: &str) -> bool {
    text.len() == 32 && text.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// A fresh random guid.
pub fn guid() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// The deterministic guid of a value: MessagePack encoding, SHA-256, first
/// 16 bytes as hex. Equal values always give equal guids.
pub fn guid_of(valu: &Value) -> Result<String> {
    let bytes = rmp_serde::to_vec(valu)?;
    let digest = Sha256::digest(&bytes);
    Ok(digest[..16].iter().map(|b| format!("{b:02x}")).collect())
}
