//! jsontree - JSON document parsing into an interned value tree.
//!
//! Parses one in-memory JSON document (RFC 8259) into an owned [`Value`]
//! tree and supports typed lookup on that tree. String contents are
//! deduplicated through a per-parse [`Interner`], and resource limits guard
//! against adversarial input.
//!
//! # Architecture
//!
//! The pipeline is organized into focused modules:
//!
//! - [`lexer`] - Pull-based tokenizer with escape decoding
//! - [`intern`] - Session-local string deduplication
//! - [`parser`] - Recursive descent parser over the token stream
//! - [`value`] - The value tree and its accessors
//! - [`limits`] - Resource protection limits
//! - [`error`] - Structured parse and access errors
//!
//! All parse state (cursor, lookahead token, intern table) belongs to one
//! [`Parser`] session, so independent parses on separate threads do not
//! interfere.
//!
//! # Example
//!
//! ```
//! use jsontree::parse;
//!
//! let root = parse(br#"{"servers": [{"host": "alpha", "port": 8080}]}"#).unwrap();
//! let port = root
//!     .get_field("servers")
//!     .and_then(|s| s.get_index(0))
//!     .and_then(|s| s.get_field("port"))
//!     .unwrap();
//! assert_eq!(port.as_i64(), Some(8080));
//! ```

// Library code must report failures as values, never panic on input.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod intern;
pub mod lexer;
pub mod limits;
pub mod parser;
pub mod value;

// Re-export commonly used types
pub use error::{AccessError, ParseError, ParseResult};
pub use intern::{IStr, Interner};
pub use limits::Limits;
pub use parser::{parse, parse_str, parse_with_limits, Parser};
pub use value::{Number, Value};
