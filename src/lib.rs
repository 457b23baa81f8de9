//! A small, self-contained JSON library: a recursive-descent parser that
//! turns a UTF-8 text buffer into a [`Value`] tree, and a canonical
//! serializer that is the inverse of the parser on the subset of inputs it
//! accepts.
//!
//! # Examples
//!
//! ```rust
//! use lljson::{parse, stringify, Value};
//!
//! let v = parse(r#"{"b": 2, "a": 1}"#).unwrap();
//! assert_eq!(stringify(&v), r#"{"a":1,"b":2}"#);
//! ```

mod error;
mod parser;
mod serializer;
mod value;

#[cfg(test)]
mod property;

pub use error::{ParseError, ParseErrorKind};
pub use serializer::stringify;
pub use value::{Array, Map, Value};

/// Parses `input` as a single JSON text and returns the resulting
/// [`Value`] tree, or the reason parsing failed.
///
/// Parsing is fail-fast: on the first error, no partial value is returned.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    parser::parse(input)
}
