//! List-literal parser: turns `(a, "b c", 0x10, key=valu)` into values.
//!
//! Grammar:
//!
//! ```text
//! list  := '(' [ item (',' item)* ] ')'
//! item  := valu [ '=' valu ]          // key=valu becomes a 2-element list
//! valu  := list | quoted | bare
//! bare  := run of chars other than whitespace and ( ) , =
//!          (an integer if it parses with base detection, else a string)
//! ```
//!
//! Lists nest at most [`MAX_DEPTH`] deep.

use crate::model::Value;
use crate::types::int::parse_int;
use crate::{Error, Result};

/// Deepest list nesting accepted; deeper input is a syntax error.
pub const MAX_DEPTH: usize = 64;

/// Parse a list literal starting at `off`. Returns the values and the offset
/// just past the closing paren.
pub fn parse_list(text: &str, off: usize) -> Result<(Vec<Value>, usize)> {
    let mut cursor = Cursor { text, pos: off, depth: 0 };
    let vals = cursor.list()?;
    Ok((vals, cursor.pos))
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    depth: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::BadSyntax { position: self.pos, message: message.into() }
    }

    fn expect(&mut self, want: char) -> Result<()> {
        self.skip_whitespace();
        match self.peek() {
            Some(c) if c == want => { self.bump(); Ok(()) }
            Some(c) => Err(self.error(format!("expected '{want}', found '{c}'"))),
            None => Err(self.error(format!("expected '{want}', found end of input"))),
        }
    }

    fn list(&mut self) -> Result<Vec<Value>> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(format!("lists nested deeper than {MAX_DEPTH}")));
        }
        self.depth += 1;
        let vals = self.items();
        self.depth -= 1;
        vals
    }

    fn items(&mut self) -> Result<Vec<Value>> {
        self.expect('(')?;
        let mut vals = Vec::new();

        self.skip_whitespace();
        if self.peek() == Some(')') {
            self.bump();
            return Ok(vals);
        }

        loop {
            let mut valu = self.valu()?;

            self.skip_whitespace();
            if self.peek() == Some('=') {
                self.bump();
                let vval = self.valu()?;
                valu = Value::List(vec![valu, vval]);
                self.skip_whitespace();
            }
            vals.push(valu);

            match self.peek() {
                Some(',') => { self.bump(); }
                Some(')') => { self.bump(); return Ok(vals); }
                Some(c) => return Err(self.error(format!("unexpected '{c}' in list"))),
                None => return Err(self.error("unterminated list")),
            }
        }
    }

    fn valu(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.peek() {
            Some('(') => Ok(Value::List(self.list()?)),
            Some(q @ ('"' | '\'')) => self.quoted(q),
            _ => self.bare(),
        }
    }

    fn quoted(&mut self, quote: char) -> Result<Value> {
        let start = self.pos;
        self.bump(); // opening quote
        let mut s = String::new();
        loop {
            match self.bump() {
                Some('\\') => match self.bump() {
                    Some('n') => s.push('\n'),
                    Some('t') => s.push('\t'),
                    Some('\\') => s.push('\\'),
                    Some(c) if c == quote => s.push(c),
                    Some(c) => { s.push('\\'); s.push(c); }
                    None => break,
                },
                Some(c) if c == quote => return Ok(Value::String(s)),
                Some(c) => s.push(c),
                None => break,
            }
        }
        Err(Error::BadSyntax { position: start, message: "unterminated string literal".into() })
    }

    fn bare(&mut self) -> Result<Value> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | ',' | '='))
        {
            self.bump();
        }

        let word = &self.text[start..self.pos];
        if word.is_empty() {
            return Err(self.error("expected a value"));
        }

        Ok(match parse_int(word) {
            Some(i) => Value::Int(i),
            None => Value::String(word.to_owned()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flat_list() {
        let (vals, off) = parse_list("(foo, 10, 0x10)", 0).unwrap();
        assert_eq!(vals, vec![Value::from("foo"), Value::Int(10), Value::Int(16)]);
        assert_eq!(off, 15);
    }

    #[test]
    fn test_kwargs_and_nesting() {
        let (vals, _) = parse_list("( (1, 2), name = \"hehe haha\", x='a\\'b' )", 0).unwrap();
        assert_eq!(
            vals,
            vec![
                Value::List(vec![Value::Int(1), Value::Int(2)]),
                Value::from(("name", "hehe haha")),
                Value::from(("x", "a'b")),
            ]
        );
    }

    #[test]
    fn test_empty_list() {
        let (vals, off) = parse_list("()", 0).unwrap();
        assert!(vals.is_empty());
        assert_eq!(off, 2);
    }

    #[test]
    fn test_offset_stops_at_close() {
        let text = "(a, b) trailing";
        let (_, off) = parse_list(text, 0).unwrap();
        assert_eq!(&text[off..], " trailing");
    }

    #[test]
    fn test_errors() {
        assert!(parse_list("foo", 0).is_err());
        assert!(parse_list("(a, b", 0).is_err());
        assert!(parse_list("(a b)", 0).is_err());
        assert!(parse_list("(,)", 0).is_err());
        assert!(parse_list("(\"open)", 0).is_err());
    }

    #[test]
    fn test_nesting_limit() {
        let ok = format!("{}{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert!(parse_list(&ok, 0).is_ok());

        let deep = format!("{}{}", "(".repeat(200_000), ")".repeat(200_000));
        match parse_list(&deep, 0) {
            Err(Error::BadSyntax { position, .. }) => assert_eq!(position, MAX_DEPTH),
            other => panic!("expected BadSyntax, got {other:?}"),
        }
    }
}
