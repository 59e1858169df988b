//! String type: case folding, stripping, enumerations and regex validation.

use regex::Regex;

use crate::model::{Norm, PropertyMap, TypeInfo, Value};
use crate::Result;
use super::printf::IntFmt;
use super::{bad_info, bad_valu};

/// Options: `lower`, `strip`, `nullval`, `restrip`, `enums`, `regex`,
/// `frob_int_fmt`.
#[derive(Debug)]
pub struct StrType {
    name: String,
    lower: bool,
    strip: bool,
    nullval: Option<String>,
    restrip: Option<Regex>,
    enums: Option<Vec<String>>,
    regex: Option<(String, Regex)>,
    frob_int_fmt: Option<IntFmt>,
}

impl StrType {
    pub fn new(name: &str, info: &TypeInfo) -> Result<Self> {
        let compile = |key: &str, pattern: &str| {
            Regex::new(pattern).map_err(|e| bad_info(name, format!("{key}={pattern:?}: {e}")))
        };

        let restrip = info.get_str("restrip").map(|p| compile("restrip", p)).transpose()?;

        let regex = info
            .get_str("regex")
            .map(|p| compile("regex", &format!("^(?:{p})$")).map(|re| (p.to_owned(), re)))
            .transpose()?;

        let frob_int_fmt = info
            .get_str("frob_int_fmt")
            .map(|f| IntFmt::parse(f).map_err(|e| bad_info(name, e)))
            .transpose()?;

        Ok(Self {
            name: name.to_owned(),
            lower: info.get_bool("lower"),
            strip: info.get_bool("strip"),
            nullval: info.get_str("nullval").map(str::to_owned),
            restrip,
            enums: info
                .get_str("enums")
                .map(|e| e.split(',').map(str::to_owned).collect()),
            regex,
            frob_int_fmt,
        })
    }

    pub fn norm(&self, valu: &Value) -> Result<Norm> {
        let mut text = match (valu, &self.frob_int_fmt) {
            (Value::Int(i), Some(fmt)) => fmt.format(*i),
            (Value::String(s), _) => s.clone(),
            _ => return Err(bad_valu(&self.name, valu, "expected a string")),
        };

        if self.lower {
            text = text.to_lowercase();
        }

        if self.nullval.as_deref() == Some(text.as_str()) {
            return Ok((Value::String(text), PropertyMap::new()));
        }

        if let Some(re) = &self.restrip {
            text = re.replace_all(&text, "").into_owned();
        }

        if self.strip {
            text = text.trim().to_owned();
        }

        if let Some(enums) = &self.enums {
            if !enums.iter().any(|e| *e == text) {
                return Err(bad_valu(
                    &self.name,
                    &Value::String(text),
                    format!("not one of: {}", enums.join(",")),
                ));
            }
        }

        if let Some((src, re)) = &self.regex {
            if !re.is_match(&text) {
                return Err(bad_valu(
                    &self.name,
                    &Value::String(text),
                    format!("does not match regex {src:?}"),
                ));
            }
        }

        Ok((Value::String(text), PropertyMap::new()))
    }
}
