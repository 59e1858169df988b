//! Boolean type, stored as 0/1.

use crate::model::{Norm, PropertyMap, Value};
use crate::Result;
use super::bad_valu;

const TRUE_TEXT: [&str; 6] = ["true", "t", "y", "yes", "1", "on"];
const FALSE_TEXT: [&str; 6] = ["false", "f", "n", "no", "0", "off"];

#[derive(Debug)]
pub struct BoolType {
    name: String,
}

impl BoolType {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_owned() }
    }

    pub fn norm(&self, valu: &Value) -> Result<Norm> {
        let bit = match valu {
            Value::String(s) => {
                let text = s.to_lowercase();
                if TRUE_TEXT.contains(&text.as_str()) {
                    1
                } else if FALSE_TEXT.contains(&text.as_str()) {
                    0
                } else {
                    return Err(bad_valu(&self.name, valu, "invalid boolean string"));
                }
            }
            other => i64::from(other.is_truthy()),
        };
        Ok((Value::Int(bit), PropertyMap::new()))
    }

    pub fn repr(&self, valu: &Value) -> String {
        valu.is_truthy().to_string()
    }
}
