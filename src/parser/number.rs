//! Number sub-parser: walks the JSON number grammar over the cursor without
//! converting, then hands the matched substring to Rust's own `str::parse`
//! for the actual decimal-to-`binary64` conversion — a correctly-rounded
//! conversion is exactly the "host-provided string-to-binary64 conversion"
//! the grammar wants, so there is no reason to write one by hand.
use super::{Cursor, PResult};
use crate::error::ParseErrorKind;
use crate::value::Value;

impl Cursor<'_> {
    pub(super) fn parse_number(&mut self) -> PResult<Value> {
        let start = self.pos;

        if self.peek() == Some(b'-') {
            self.advance();
        }

        match self.peek() {
            Some(b'0') => self.advance(),
            Some(b'1'..=b'9') => {
                self.advance();
                while matches!(self.peek(), Some(b'0'..=b'9')) {
                    self.advance();
                }
            }
            _ => return Err(ParseErrorKind::InvalidValue),
        }

        if self.peek() == Some(b'.') {
            self.advance();
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(ParseErrorKind::InvalidValue);
            }
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.advance();
            }
        }

        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.advance();
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.advance();
            }
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(ParseErrorKind::InvalidValue);
            }
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.advance();
            }
        }

        let text = &self.input[start..self.pos];
        let n: f64 = text
            .parse()
            .expect("grammar-matched number literal always parses");
        if n.is_infinite() {
            return Err(ParseErrorKind::NumberTooBig);
        }
        Ok(Value::number(n))
    }
}
