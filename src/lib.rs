//! Strict JSON syntax checker and value parser.
//!
//! Hand-written scanner plus recursive-descent grammar. The whole
//! document must be resident in memory before parsing starts; a parse
//! either returns the value tree or the first violation as a typed
//! error. The root must be an object or an array, nesting is capped at
//! [`token::MAX_DEPTH`] levels, and nothing here prints or exits — the
//! caller owns all process-level behavior.

pub mod error;
mod parser;
mod scanner;
pub mod token;
pub mod value;
pub mod writer;

pub use crate::error::{Error, ErrorKind};
pub use crate::value::{Map, Value};

pub type Result<T> = std::result::Result<T, Error>;

/// Parse a complete JSON document into a [`Value`] tree.
pub fn parse_str(input: &str) -> Result<Value> {
    parser::parse_document(input)
}

/// Check a complete JSON document for syntactic validity, discarding
/// the parsed tree.
pub fn validate_str(input: &str) -> Result<()> {
    parser::parse_document(input).map(|_| ())
}

/// Encode a [`Value`] tree as compact JSON text. Re-parsing the output
/// yields a tree equal to the input.
pub fn to_string(value: &Value) -> String {
    writer::to_string(value)
}
