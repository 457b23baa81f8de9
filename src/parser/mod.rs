//! The recursive-descent JSON parser.
//!
//! [`parse`] walks the input once, left to right, building a [`Value`] tree
//! directly — there is no intermediate token stream. Parsing is fail-fast:
//! the first grammar violation aborts the whole parse and no partial value
//! is handed back to the caller.
mod number;
mod string;

use crate::error::{ParseError, ParseErrorKind};
use crate::value::{Map, Value};

/// A cursor over the UTF-8 bytes of the input text.
///
/// Holds just a byte index; there is no sticky error flag beyond the
/// `Result` threaded through every sub-parser, since Rust's `?` operator
/// already gives us "abort on first error" for free.
pub(crate) struct Cursor<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

type PResult<T> = Result<T, ParseErrorKind>;

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn len(&self) -> usize {
        self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\r' | b'\n')) {
            self.advance();
        }
    }

    /// Consumes the literal ASCII bytes `lit` if they appear at the cursor.
    fn eat_literal(&mut self, lit: &[u8]) -> bool {
        if self.bytes[self.pos..].starts_with(lit) {
            self.pos += lit.len();
            true
        } else {
            false
        }
    }

    /// Turns a byte offset into a 1-based (line, column) pair for error
    /// reporting.
    fn error_at(&self, kind: ParseErrorKind, offset: usize) -> ParseError {
        let mut line = 1;
        let mut col = 1;
        for &b in &self.bytes[..offset.min(self.len())] {
            if b == b'\n' {
                line += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
        ParseError::new(kind, line, col)
    }

    fn parse_value(&mut self) -> PResult<Value> {
        match self.peek() {
            None => Err(ParseErrorKind::ExpectValue),
            Some(b'n') => self.parse_null(),
            Some(b't' | b'f') => self.parse_bool(),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(_) => self.parse_number(),
        }
    }

    fn parse_null(&mut self) -> PResult<Value> {
        if self.eat_literal(b"null") {
            Ok(Value::Null)
        } else {
            Err(ParseErrorKind::InvalidValue)
        }
    }

    fn parse_bool(&mut self) -> PResult<Value> {
        if self.eat_literal(b"true") {
            Ok(Value::Bool(true))
        } else if self.eat_literal(b"false") {
            Ok(Value::Bool(false))
        } else {
            Err(ParseErrorKind::InvalidValue)
        }
    }

    fn parse_array(&mut self) -> PResult<Value> {
        debug_assert_eq!(self.peek(), Some(b'['));
        self.advance();
        self.skip_ws();
        let mut items = Vec::new();
        if self.peek() == Some(b']') {
            self.advance();
            return Ok(Value::Array(items));
        }
        loop {
            self.skip_ws();
            items.push(self.parse_value()?);
            self.skip_ws();
            match self.peek() {
                Some(b',') => {
                    self.advance();
                }
                Some(b']') => {
                    self.advance();
                    return Ok(Value::Array(items));
                }
                _ => return Err(ParseErrorKind::MissCommaOrSquareBracket),
            }
        }
    }

    fn parse_object(&mut self) -> PResult<Value> {
        debug_assert_eq!(self.peek(), Some(b'{'));
        self.advance();
        self.skip_ws();
        let mut map = Map::new();
        if self.peek() == Some(b'}') {
            self.advance();
            return Ok(Value::Object(map));
        }
        loop {
            self.skip_ws();
            if self.peek() != Some(b'"') {
                return Err(ParseErrorKind::MissKey);
            }
            let key = self.parse_string()?;
            self.skip_ws();
            if self.peek() != Some(b':') {
                return Err(ParseErrorKind::MissColon);
            }
            self.advance();
            self.skip_ws();
            let value = self.parse_value()?;
            map.insert(key, value);
            self.skip_ws();
            match self.peek() {
                Some(b',') => {
                    self.advance();
                }
                Some(b'}') => {
                    self.advance();
                    return Ok(Value::Object(map));
                }
                _ => return Err(ParseErrorKind::MissCommaOrCurlyBracket),
            }
        }
    }
}

/// Parses `input` as a single JSON text.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    let mut cursor = Cursor::new(input);
    cursor.skip_ws();
    let value = cursor.parse_value().map_err(|kind| {
        // The cursor has not advanced past the failing token, so its
        // current position is the error location.
        cursor.error_at(kind, cursor.pos)
    })?;
    cursor.skip_ws();
    if cursor.pos < cursor.len() {
        return Err(cursor.error_at(ParseErrorKind::RootNotSingular, cursor.pos));
    }
    Ok(value)
}
