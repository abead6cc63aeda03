//! jsonlet core parser
//!
//! Minimal recursive-descent parser for scalar JSON documents. A
//! document holds exactly one value - `null`, `true`, `false`, or a
//! number - with optional surrounding whitespace.
//!
//! # Architecture
//!
//! - **parser.rs** - Cursor, value dispatch, literal and number recognition
//! - **value.rs** - Scalar value type and accessors

pub mod parser;
pub mod value;

pub use parser::{parse, ErrorCode, ParseError};
pub use value::{Value, ValueKind};
