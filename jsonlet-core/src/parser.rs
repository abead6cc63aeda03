//! Recursive-descent parser for scalar JSON documents.
//!
//! The parser consumes a read-only byte buffer and produces a single
//! [`Value`]. Dispatch is by leading byte: `t`/`f`/`n` go to literal
//! recognition, everything else to number recognition, which rejects
//! bytes that cannot start a number.

use memchr::memchr;
use phf::phf_map;

use crate::value::Value;

/// Error codes for parse failures.
///
/// Using an enum instead of String keeps errors `Copy` and removes
/// heap allocation for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorCode {
    /// Input is empty or whitespace-only
    ExpectValue = 0,
    /// Bad value start, keyword mismatch, or malformed fraction
    InvalidValue,
    /// Extra content after the root value, or a multi-digit number
    /// starting with `0`
    RootNotSingular,
    /// Number magnitude overflows to infinity
    NumberTooBig,
}

impl ErrorCode {
    /// Get a human-readable message for this error code.
    pub fn message(self) -> &'static str {
        match self {
            Self::ExpectValue => "expect value",
            Self::InvalidValue => "invalid value",
            Self::RootNotSingular => "root not singular",
            Self::NumberTooBig => "number too big",
        }
    }
}

/// Error returned when parsing fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    /// What went wrong.
    pub code: ErrorCode,
    /// Byte offset at which the parser gave up.
    pub offset: usize,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at byte {}", self.code.message(), self.offset)
    }
}

impl std::error::Error for ParseError {}

/// Literal keywords by leading byte.
static LITERALS: phf::Map<u8, (&'static str, Value)> = phf_map! {
    b'n' => ("null", Value::Null),
    b't' => ("true", Value::True),
    b'f' => ("false", Value::False),
};

/// Parse a complete JSON document into a single scalar value.
///
/// The document must contain exactly one value, with only whitespace
/// (space, tab, newline, carriage return) permitted around it.
///
/// ```
/// use jsonlet_core::{parse, Value};
///
/// assert_eq!(parse(b"  null  "), Ok(Value::Null));
/// assert_eq!(parse(b"-1.5e3"), Ok(Value::Number(-1500.0)));
/// assert!(parse(b"true x").is_err());
/// ```
pub fn parse(input: &[u8]) -> Result<Value, ParseError> {
    let mut cursor = Cursor::new(input);
    cursor.skip_whitespace();
    let value = cursor.parse_value()?;
    cursor.skip_whitespace();
    if !cursor.eof() {
        return Err(cursor.fail(ErrorCode::RootNotSingular));
    }
    Ok(value)
}

/// Read position over the input buffer.
///
/// Owned by a single parse call; every advance is bounds-checked
/// against the buffer length.
struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    #[inline]
    fn rest(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    #[inline]
    fn eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    #[inline]
    fn fail(&self, code: ErrorCode) -> ParseError {
        ParseError { code, offset: self.pos }
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.peek() {
            None => Err(self.fail(ErrorCode::ExpectValue)),
            Some(b't' | b'f' | b'n') => self.parse_literal(),
            Some(_) => self.parse_number(),
        }
    }

    /// Match one of the fixed keywords `null`, `true`, `false`.
    ///
    /// The whole keyword must match, and must not run into further
    /// alphabetic content: `truee` is not `true` followed by junk, it
    /// is no literal at all.
    fn parse_literal(&mut self) -> Result<Value, ParseError> {
        let rest = self.rest();
        if let Some(&(keyword, value)) = rest.first().and_then(|b| LITERALS.get(b)) {
            let matched = rest.starts_with(keyword.as_bytes());
            let runs_on = matches!(rest.get(keyword.len()), Some(b) if b.is_ascii_alphabetic());
            if matched && !runs_on {
                self.pos += keyword.len();
                return Ok(value);
            }
        }
        Err(self.fail(ErrorCode::InvalidValue))
    }

    /// Parse a number, validating shape before converting.
    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let rest = self.rest();
        match rest.first() {
            Some(&b) if b == b'-' || b.is_ascii_digit() => {}
            _ => return Err(self.fail(ErrorCode::InvalidValue)),
        }

        // One-character lookahead on a leading zero: `0` may only be
        // followed by a fraction, an exponent, whitespace, or end of
        // input. Multi-digit forms like `01` are rejected here.
        if rest[0] == b'0' {
            match rest.get(1).copied() {
                None | Some(b'.' | b'e' | b'E' | b' ' | b'\t' | b'\n' | b'\r') => {}
                Some(_) => {
                    return Err(ParseError {
                        code: ErrorCode::RootNotSingular,
                        offset: self.pos + 1,
                    });
                }
            }
        }

        // The first `.` anywhere in the remaining input must be
        // followed by a digit. The scan runs to the end of the buffer,
        // not just over the number's own span.
        if let Some(dot) = memchr(b'.', rest) {
            match rest.get(dot + 1).copied() {
                Some(d) if d.is_ascii_digit() => {}
                _ => {
                    return Err(ParseError {
                        code: ErrorCode::InvalidValue,
                        offset: self.pos + dot,
                    });
                }
            }
        }

        let len = float_prefix_len(rest);
        if len == 0 {
            // No convertible prefix: yield zero and consume nothing.
            return Ok(Value::Number(0.0));
        }
        let text = std::str::from_utf8(&rest[..len]).expect("numeric prefix is ASCII");
        let n: f64 = text.parse().expect("numeric prefix is a float literal");
        if n.is_infinite() {
            return Err(self.fail(ErrorCode::NumberTooBig));
        }
        self.pos += len;
        Ok(Value::Number(n))
    }
}

/// Length of the longest prefix of `rest` that forms a decimal float
/// literal: optional sign, digits with optional fraction, optional
/// exponent. The exponent only counts when it has at least one digit.
/// Returns 0 when the mantissa has no digits at all.
fn float_prefix_len(rest: &[u8]) -> usize {
    let mut i = 0;
    if matches!(rest.first(), Some(&(b'+' | b'-'))) {
        i += 1;
    }

    let mut digits = 0;
    while i < rest.len() && rest[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }

    if i < rest.len() && rest[i] == b'.' {
        let mut j = i + 1;
        while j < rest.len() && rest[j].is_ascii_digit() {
            j += 1;
        }
        // The dot joins the prefix only when digits surround it.
        if digits > 0 || j > i + 1 {
            digits += j - i - 1;
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    if i < rest.len() && (rest[i] == b'e' || rest[i] == b'E') {
        let mut j = i + 1;
        if j < rest.len() && (rest[j] == b'+' || rest[j] == b'-') {
            j += 1;
        }
        let exp_digits = j;
        while j < rest.len() && rest[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_digits {
            i = j;
        }
    }

    i
}
