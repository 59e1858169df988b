//! Hierarchical tag type: `foo.bar.baz`, optionally `@<time>-<time>`.

use regex::Regex;

use crate::model::{Norm, PropertyMap, Value};
use crate::registry::TypeLib;
use crate::Result;
use super::{bad_info, bad_valu};

const TAG_PATTERN: &str = r"^([\w]+\.)*[\w]+$";

#[derive(Debug)]
pub struct TagType {
    name: String,
    tagre: Regex,
}

impl TagType {
    pub fn new(name: &str) -> Result<Self> {
        let tagre = Regex::new(TAG_PATTERN).map_err(|e| bad_info(name, e.to_string()))?;
        Ok(Self { name: name.to_owned(), tagre })
    }

    /// The `@` suffix yields `seen:min`/`seen:max` sub-properties, each
    /// normalized through the registry's `time` type.
    pub fn norm(&self, tlib: &TypeLib, valu: &Value) -> Result<Norm> {
        let Some(text) = valu.as_str() else {
            return Err(bad_valu(&self.name, valu, "expected a string"));
        };

        let (tag, range) = match text.split_once('@') {
            Some((tag, range)) => (tag, Some(range)),
            None => (text, None),
        };

        let mut subs = PropertyMap::new();
        if let Some(range) = range {
            let mut ticks = Vec::new();
            for part in range.split('-') {
                match tlib.type_norm("time", &Value::from(part), None)?.0 {
                    Value::Int(tick) => ticks.push(tick),
                    other => return Err(bad_valu(&self.name, &other, "time did not normalize to an integer")),
                }
            }
            // split always yields at least one part
            let tmin = ticks.iter().copied().min().unwrap_or_default();
            let tmax = ticks.iter().copied().max().unwrap_or_default();
            subs.insert("seen:min".into(), Value::Int(tmin));
            subs.insert("seen:max".into(), Value::Int(tmax));
        }

        let tag = tag.to_lowercase();
        if !self.tagre.is_match(&tag) {
            return Err(bad_valu(&self.name, valu, "invalid tag syntax"));
        }

        Ok((Value::String(tag), subs))
    }
}
