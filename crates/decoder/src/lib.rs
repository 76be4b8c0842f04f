//! Resilient decoder for schema-evolving query-log records.
//!
//! The log format has been through years of field renames and re-encodings;
//! this crate reads any line ever written by any version. The decoder runs a
//! single flat token scan over a record (key names are globally unique across
//! nesting levels, so no document tree is built), dispatches recognized keys
//! through a static handler table, silently ignores unknown and mistyped
//! fields, and aborts only the current record on a value-level malformation.
//! A legacy field carrying a base64, wire-format-packed query message is
//! unpacked through `hickory-proto` to recover the query name/type/class.
pub mod decode;
pub mod extract;
pub mod scanner;

mod handlers;
mod question;

pub use decode::{decode_line, decode_log_entry, DecodedRecord};
pub use extract::extract_string_field;
pub use scanner::{ScanError, Token, TokenScanner};
