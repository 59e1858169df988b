//! Integer type with bounds and min/max accumulation.

use crate::model::{Norm, PropertyMap, TypeInfo, Value};
use crate::Result;
use super::printf::IntFmt;
use super::{bad_info, bad_valu};

/// Accumulation mode for repeated writes: keep the smallest ("first seen")
/// or the largest ("last seen") value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinMax {
    Min,
    Max,
}

impl MinMax {
    /// `ismin` wins over `ismax` when both are set.
    pub fn from_info(info: &TypeInfo) -> Option<Self> {
        if info.get_bool("ismin") {
            Some(MinMax::Min)
        } else if info.get_bool("ismax") {
            Some(MinMax::Max)
        } else {
            None
        }
    }

    pub fn apply(self, new: i64, old: i64) -> i64 {
        match self {
            MinMax::Min => new.min(old),
            MinMax::Max => new.max(old),
        }
    }
}

/// Options: `min`, `max`, `ismin`, `ismax`, `fmt`.
#[derive(Debug)]
pub struct IntType {
    name: String,
    fmt: IntFmt,
    minval: Option<i64>,
    maxval: Option<i64>,
    minmax: Option<MinMax>,
}

impl IntType {
    pub fn new(name: &str, info: &TypeInfo) -> Result<Self> {
        let fmt = match info.get_str("fmt") {
            Some(f) => IntFmt::parse(f).map_err(|e| bad_info(name, e))?,
            None => IntFmt::default(),
        };

        Ok(Self {
            name: name.to_owned(),
            fmt,
            minval: info.get_int("min"),
            maxval: info.get_int("max"),
            minmax: MinMax::from_info(info),
        })
    }

    pub fn norm(&self, valu: &Value, oldval: Option<&Value>) -> Result<Norm> {
        let mut ival = match valu {
            Value::Int(i) => *i,
            Value::String(s) => parse_int(s)
                .ok_or_else(|| bad_valu(&self.name, valu, "invalid integer literal"))?,
            _ => return Err(bad_valu(&self.name, valu, "expected an integer")),
        };

        if let (Some(mm), Some(old)) = (self.minmax, oldval.and_then(Value::as_int)) {
            ival = mm.apply(ival, old);
        }

        if let Some(min) = self.minval {
            if ival < min {
                return Err(bad_valu(&self.name, &Value::Int(ival), format!("less than min {min}")));
            }
        }

        if let Some(max) = self.maxval {
            if ival > max {
                return Err(bad_valu(&self.name, &Value::Int(ival), format!("greater than max {max}")));
            }
        }

        Ok((Value::Int(ival), PropertyMap::new()))
    }

    pub fn repr(&self, valu: &Value) -> Result<String> {
        match valu {
            Value::Int(i) => Ok(self.fmt.format(*i)),
            _ => Err(bad_valu(&self.name, valu, "expected an integer")),
        }
    }
}

/// Parse an integer literal with base detection: optional sign, then
/// `0x`/`0o`/`0b` prefixes or decimal. `_` may separate digits. Decimal
/// literals with leading zeros are rejected (`010`), except all-zero ones.
pub(crate) fn parse_int(text: &str) -> Option<i64> {
    let text = text.trim();
    let (neg, body) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = match body.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => (16, body[2..].strip_prefix('_').unwrap_or(&body[2..])),
        Some("0o") => (8, body[2..].strip_prefix('_').unwrap_or(&body[2..])),
        Some("0b") => (2, body[2..].strip_prefix('_').unwrap_or(&body[2..])),
        _ => (10, body),
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
        || !digits.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return None;
    }

    let clean: String = digits.chars().filter(|&c| c != '_').collect();
    if radix == 10 && clean.len() > 1 && clean.starts_with('0') && clean.bytes().any(|b| b != b'0') {
        return None;
    }

    let mag = i128::from_str_radix(&clean, radix).ok()?;
    i64::try_from(if neg { -mag } else { mag }).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_parse_int_bases() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("-42"), Some(-42));
        assert_eq!(parse_int("+7"), Some(7));
        assert_eq!(parse_int("0x1F"), Some(31));
        assert_eq!(parse_int("0o17"), Some(15));
        assert_eq!(parse_int("0B101"), Some(5));
        assert_eq!(parse_int("1_000"), Some(1000));
        assert_eq!(parse_int("0x_ff"), Some(255));
        assert_eq!(parse_int("000"), Some(0));
        assert_eq!(parse_int(" 12 "), Some(12));
        assert_eq!(parse_int("-9223372036854775808"), Some(i64::MIN));
    }

    #[test]
    fn test_parse_int_rejects() {
        for bad in ["", "-", "010", "0x", "1__0", "_1", "1_", "12a", "0xfg", "--1", "1.5", "9223372036854775808"] {
            assert_eq!(parse_int(bad), None, "{bad:?}");
        }
    }

    #[test]
    fn test_norm_bounds() {
        let t = IntType::new("port", &TypeInfo::new().with("min", 0).with("max", 65535)).unwrap();
        assert_eq!(t.norm(&Value::from("0x50"), None).unwrap().0, Value::Int(80));
        assert!(matches!(t.norm(&Value::Int(-1), None), Err(Error::BadValue { .. })));
        assert!(t.norm(&Value::Int(65536), None).is_err());
        assert!(t.norm(&Value::Float(1.0), None).is_err());
        assert!(t.norm(&Value::from("hehe"), None).is_err());
    }

    #[test]
    fn test_norm_minmax() {
        let tmin = IntType::new("int:min", &TypeInfo::new().with("ismin", 1)).unwrap();
        let tmax = IntType::new("int:max", &TypeInfo::new().with("ismax", 1)).unwrap();
        let old = Value::Int(30);

        assert_eq!(tmin.norm(&Value::Int(50), Some(&old)).unwrap().0, Value::Int(30));
        assert_eq!(tmax.norm(&Value::Int(50), Some(&old)).unwrap().0, Value::Int(50));
        assert_eq!(tmin.norm(&Value::Int(50), None).unwrap().0, Value::Int(50));
    }

    #[test]
    fn test_repr_fmt() {
        let t = IntType::new("int:hex", &TypeInfo::new().with("fmt", "0x%04x")).unwrap();
        assert_eq!(t.repr(&Value::Int(255)).unwrap(), "0x00ff");
        assert!(IntType::new("bad", &TypeInfo::new().with("fmt", "%s")).is_err());
    }
}
