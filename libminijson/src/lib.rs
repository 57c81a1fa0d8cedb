//! A minimal recursive-descent JSON parser.
//!
//! The parser turns a document into a [`Value`] tree. It supports a small
//! subset of JSON:
//!
//! - objects, with keys kept in insertion order and duplicate keys
//!   overwriting earlier ones in place
//! - arrays
//! - strings, taken verbatim between quotes (no escape sequences)
//! - non-negative integers of any size
//! - `true`, `false` and `null`
//!
//! Trailing commas before `}` or `]` are accepted.
//!
//! # Nesting
//!
//! Decoders recurse for every nested object or array, so a pathologically
//! deep document can overflow the stack. Set [`ParseOptions::max_depth`] when
//! parsing untrusted input.
//!
//! # Example
//!
//! ```
//! let value = libminijson::parse(r#"{"a": null, "b": [1, 2, 3]}"#).unwrap();
//! assert!(value.get("a").unwrap().is_null());
//! assert_eq!(format!("{:?}", value), r#"{"a": null, "b": [1, 2, 3]}"#);
//! ```

mod cursor;
mod error;
mod options;
mod parser;
mod value;

pub use error::{Location, ParseError, Result};
pub use options::ParseOptions;
pub use parser::Parser;
pub use value::{Map, Value};

/// Parse a JSON document from a string.
pub fn parse(input: &str) -> Result<Value> {
    Parser::new(input).parse()
}

/// Parse a JSON document with explicit options.
pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Value> {
    Parser::with_options(input, options.clone()).parse()
}
