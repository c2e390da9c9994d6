//! Error types for codec operations.
//!
//! Every variant produced while decoding carries the byte offset at which the
//! failure was detected, so callers handed a malformed payload by an upstream
//! API can report exactly where the stream went wrong.
//!
//! Encode-side contract violations (e.g. a value too large for its 4-byte
//! length prefix) are programmer errors, not decode errors, and panic instead
//! of returning a variant here. Callers control everything that is encoded;
//! only decoded input is untrusted.

use thiserror::Error;

/// Error type for decode operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Fewer bytes remain than a read requires.
    #[error("unexpected end of buffer at offset {offset}: need {needed} bytes, {remaining} remain")]
    Truncated {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A length prefix exceeds the schema-declared maximum for the field.
    #[error("length {len} exceeds maximum {max} at offset {offset}")]
    LengthExceeded { offset: usize, len: u32, max: u32 },

    /// A boolean-coded word was neither 0 nor 1.
    #[error("invalid boolean {value} at offset {offset}")]
    InvalidBool { offset: usize, value: u32 },

    /// An optional's presence flag was neither 0 nor 1.
    #[error("invalid presence flag {value} at offset {offset}")]
    InvalidPresence { offset: usize, value: u32 },

    /// A union or enum discriminant is not among the schema's declared set.
    #[error("unknown discriminant {value} for {ty} at offset {offset}")]
    InvalidDiscriminant {
        offset: usize,
        ty: &'static str,
        value: i32,
    },

    /// A string field's bytes are not valid UTF-8.
    #[error("invalid utf-8 in string at offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// A padding byte after an opaque field was non-zero.
    #[error("non-zero padding byte at offset {offset}")]
    NonZeroPadding { offset: usize },

    /// Nested container decoding exceeded the reader's depth budget.
    #[error("nesting depth limit exceeded at offset {offset}")]
    DepthLimitExceeded { offset: usize },

    /// A top-level decode left unconsumed bytes in the buffer.
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
}
