//! printf-style integer formatting for `fmt=` and `frob_int_fmt=` options.
//!
//! Supports one conversion per format string: `%d`, `%i`, `%x`, `%X`, `%o`, `%b`,
//! with an optional `0` flag and width (`%08x`). Literal text around the
//! conversion is kept; `%%` is a literal percent.

/// Widest field a format may pad to.
pub const MAX_WIDTH: usize = 64;

/// A parsed integer format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntFmt {
    prefix: String,
    suffix: String,
    zero: bool,
    width: usize,
    conv: char,
}

impl IntFmt {
    /// Parse a format string. Returns a description of the problem on failure.
    pub fn parse(fmt: &str) -> Result<Self, String> {
        let mut prefix = String::new();
        let mut chars = fmt.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch != '%' {
                prefix.push(ch);
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                prefix.push('%');
                continue;
            }

            let zero = chars.next_if_eq(&'0').is_some();
            let mut width = 0usize;
            while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                width = width * 10 + d as usize;
                if width > MAX_WIDTH {
                    return Err(format!("width exceeds {MAX_WIDTH} in {fmt:?}"));
                }
                chars.next();
            }

            let conv = match chars.next() {
                Some(c @ ('d' | 'i' | 'x' | 'X' | 'o' | 'b')) => c,
                Some(c) => return Err(format!("unsupported conversion '%{c}' in {fmt:?}")),
                None => return Err(format!("dangling '%' in {fmt:?}")),
            };

            let mut suffix = String::new();
            while let Some(ch) = chars.next() {
                if ch == '%' && chars.next_if_eq(&'%').is_none() {
                    return Err(format!("more than one conversion in {fmt:?}"));
                }
                suffix.push(ch);
            }

            return Ok(Self { prefix, suffix, zero, width, conv });
        }

        Err(format!("no conversion in {fmt:?}"))
    }

    pub fn format(&self, valu: i64) -> String {
        let mag = valu.unsigned_abs();
        let digits = match self.conv {
            'x' => format!("{mag:x}"),
            'X' => format!("{mag:X}"),
            'o' => format!("{mag:o}"),
            'b' => format!("{mag:b}"),
            _ => mag.to_string(),
        };
        let sign = if valu < 0 { "-" } else { "" };

        let len = sign.len() + digits.len();
        let body = if len >= self.width {
            format!("{sign}{digits}")
        } else if self.zero {
            format!("{sign}{}{digits}", "0".repeat(self.width - len))
        } else {
            format!("{}{sign}{digits}", " ".repeat(self.width - len))
        };

        format!("{}{body}{}", self.prefix, self.suffix)
    }
}

impl Default for IntFmt {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            zero: false,
            width: 0,
            conv: 'd',
        }
    }
}
