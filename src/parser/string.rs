//! String sub-parser: decodes a JSON string literal into a Rust `String`,
//! handling the escape table and `\uXXXX` / surrogate-pair decoding from
//! §4.3 of the spec.
use super::{Cursor, PResult};
use crate::error::ParseErrorKind;

impl Cursor<'_> {
    /// Parses a JSON string literal starting at the opening `"` and returns
    /// its decoded contents (without the surrounding quotes).
    pub(super) fn parse_string(&mut self) -> PResult<String> {
        debug_assert_eq!(self.peek(), Some(b'"'));
        self.advance();

        let mut out = String::new();
        loop {
            match self.peek() {
                None => return Err(ParseErrorKind::MissQuotationMark),
                Some(b'"') => {
                    self.advance();
                    return Ok(out);
                }
                Some(b'\\') => {
                    self.advance();
                    self.parse_escape(&mut out)?;
                }
                Some(b) if b < 0x20 => return Err(ParseErrorKind::InvalidStringChar),
                Some(_) => {
                    // Verbatim byte or the start of a multi-byte UTF-8
                    // sequence; `self.input` is a `&str`, so slicing from
                    // here is guaranteed well-formed.
                    let ch = self.input[self.pos..]
                        .chars()
                        .next()
                        .expect("not at end of input");
                    out.push(ch);
                    self.pos += ch.len_utf8();
                }
            }
        }
    }

    /// Handles one escape sequence, with the cursor positioned just past
    /// the leading backslash.
    fn parse_escape(&mut self, out: &mut String) -> PResult<()> {
        match self.peek() {
            None => Err(ParseErrorKind::MissQuotationMark),
            Some(b'"') => {
                self.advance();
                out.push('"');
                Ok(())
            }
            Some(b'\\') => {
                self.advance();
                out.push('\\');
                Ok(())
            }
            Some(b'/') => {
                self.advance();
                out.push('/');
                Ok(())
            }
            Some(b'b') => {
                self.advance();
                out.push('\u{0008}');
                Ok(())
            }
            Some(b'f') => {
                self.advance();
                out.push('\u{000C}');
                Ok(())
            }
            Some(b'n') => {
                self.advance();
                out.push('\n');
                Ok(())
            }
            Some(b'r') => {
                self.advance();
                out.push('\r');
                Ok(())
            }
            Some(b't') => {
                self.advance();
                out.push('\t');
                Ok(())
            }
            Some(b'u') => {
                self.advance();
                self.parse_unicode_escape(out)
            }
            Some(_) => Err(ParseErrorKind::InvalidStringEscape),
        }
    }

    /// Decodes a `\uXXXX` escape, combining it with a following `\uYYYY`
    /// low surrogate if it is a high surrogate.
    fn parse_unicode_escape(&mut self, out: &mut String) -> PResult<()> {
        let cp = self.read_hex4(ParseErrorKind::InvalidUnicodeHex)?;

        if (0xD800..=0xDBFF).contains(&cp) {
            if self.peek() != Some(b'\\') || self.peek_at(1) != Some(b'u') {
                return Err(ParseErrorKind::InvalidUnicodeSurrogate);
            }
            self.advance();
            self.advance();
            let low = self.read_hex4(ParseErrorKind::InvalidUnicodeSurrogate)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(ParseErrorKind::InvalidUnicodeSurrogate);
            }
            let combined = 0x10000 + ((cp - 0xD800) << 10) + (low - 0xDC00);
            out.push(char::from_u32(combined).expect("valid surrogate pair combination"));
            return Ok(());
        }

        if (0xDC00..=0xDFFF).contains(&cp) {
            // A lone low surrogate, unpaired with a preceding high
            // surrogate. The reference implementation this crate is
            // grounded on accepts this as a bug; we reject it instead, see
            // SPEC_FULL.md §4.7 and DESIGN.md.
            return Err(ParseErrorKind::InvalidUnicodeSurrogate);
        }

        out.push(char::from_u32(cp).expect("cp is outside the surrogate range"));
        Ok(())
    }

    /// Reads exactly 4 hex digits, returning `err` if fewer than 4 remain or
    /// any of them is not a hex digit.
    fn read_hex4(&mut self, err: ParseErrorKind) -> PResult<u32> {
        let mut value: u32 = 0;
        for _ in 0..4 {
            let digit = self.peek().and_then(|b| (b as char).to_digit(16));
            let Some(digit) = digit else {
                return Err(err);
            };
            value = value * 16 + digit;
            self.advance();
        }
        Ok(value)
    }
}
