//! Time type: epoch milliseconds (UTC).
//!
//! Text is reduced to its digits, and the digit count picks the layout:
//!
//! | digits | layout |
//! |--------|--------|
//! | 4 | `YYYY` |
//! | 6 | `YYYYMM` |
//! | 8 | `YYYYMMDD` |
//! | 10 | `YYYYMMDDhh` |
//! | 12 | `YYYYMMDDhhmm` |
//! | 14 | `YYYYMMDDhhmmss` |
//! | 15-17 | `YYYYMMDDhhmmss` + fractional seconds |
//!
//! `?` is the far-future sentinel [`TIME_MAX`]. Other integers must fall in
//! years 0000-9999 so that every stored value reprs to parseable text.

use chrono::{DateTime, NaiveDate};

use crate::model::{Norm, PropertyMap, TypeInfo, Value};
use crate::Result;
use super::bad_valu;
use super::int::MinMax;

/// Sentinel for "unknown/far future"; reprs and parses as `?`.
pub const TIME_MAX: i64 = i64::MAX;

/// `0000/01/01 00:00:00.000`, the earliest representable instant.
pub const TIME_MIN: i64 = -62_167_219_200_000;

/// `9999/12/31 23:59:59.999`, the latest representable instant.
pub const TIME_LAST: i64 = 253_402_300_799_999;

/// Options: `ismin`, `ismax`.
#[derive(Debug)]
pub struct TimeType {
    name: String,
    minmax: Option<MinMax>,
}

impl TimeType {
    pub fn new(name: &str, info: &TypeInfo) -> Self {
        Self {
            name: name.to_owned(),
            minmax: MinMax::from_info(info),
        }
    }

    pub fn norm(&self, valu: &Value, oldval: Option<&Value>) -> Result<Norm> {
        let mut tick = match valu {
            Value::Int(i) if *i == TIME_MAX || (TIME_MIN..=TIME_LAST).contains(i) => *i,
            Value::Int(_) => return Err(bad_valu(&self.name, valu, "outside years 0000-9999")),
            Value::String(s) => parse_time(s)
                .ok_or_else(|| bad_valu(&self.name, valu, "unknown time format"))?,
            _ => return Err(bad_valu(&self.name, valu, "expected a time string or epoch millis")),
        };

        if let (Some(mm), Some(old)) = (self.minmax, oldval.and_then(Value::as_int)) {
            tick = mm.apply(tick, old);
        }

        Ok((Value::Int(tick), PropertyMap::new()))
    }

    pub fn repr(&self, valu: &Value) -> Result<String> {
        valu.as_int()
            .and_then(repr_time)
            .ok_or_else(|| bad_valu(&self.name, valu, "not a representable epoch millis value"))
    }
}

/// Parse a timestamp into epoch milliseconds.
pub fn parse_time(text: &str) -> Option<i64> {
    if text.trim() == "?" {
        return Some(TIME_MAX);
    }

    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    let field = |range: std::ops::Range<usize>| -> Option<u32> {
        digits.get(range).map_or(Some(0), |d| d.parse().ok())
    };

    match digits.len() {
        4 | 6 | 8 | 10 | 12 | 14..=17 => {}
        _ => return None,
    }

    let year: i32 = digits[..4].parse().ok()?;
    let month = if digits.len() >= 6 { field(4..6)? } else { 1 };
    let day = if digits.len() >= 8 { field(6..8)? } else { 1 };
    let hour = field(8..10)?;
    let minute = field(10..12)?;
    let second = field(12..14)?;

    let millis = match digits.get(14..) {
        Some(frac) if !frac.is_empty() => format!("{frac:0<3}").parse().ok()?,
        _ => 0,
    };

    let dt = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_milli_opt(hour, minute, second, millis)?;
    Some(dt.and_utc().timestamp_millis())
}

/// Render epoch milliseconds as `YYYY/MM/DD hh:mm:ss.mmm`.
pub fn repr_time(tick: i64) -> Option<String> {
    if tick == TIME_MAX {
        return Some("?".into());
    }
    let dt = DateTime::from_timestamp_millis(tick)?;
    Some(dt.format("%Y/%m/%d %H:%M:%S%.3f").to_string())
}
