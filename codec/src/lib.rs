//! XDR (RFC 4506) serialization for Stellar wire formats.
//!
//! # Overview
//!
//! A binary serialization library designed to efficiently and safely:
//! - Serialize structured data into the XDR wire format
//! - Deserialize untrusted XDR input into structured data
//!
//! XDR is the canonical encoding for all Stellar ledger structures,
//! transactions, and smart-contract values: big-endian, 4-byte aligned, with
//! length-prefixed variable data, presence-flagged optionals, and
//! discriminant-tagged unions. Encoded bytes are hashed and signed, so the
//! encoder is bit-exact and the decoder rejects anything the encoder could
//! not have produced.
//!
//! # Supported Types
//!
//! Natively supports:
//! - Primitives: `u32`, `u64`, `i32`, `i64`, `bool`
//! - Containers: `Option<T>`, `Box<T>`, fixed-count arrays `[T; N]`, and the
//!   bounded variable-length types [`XdrString`], [`VarOpaque`], and
//!   [`VarArray`]
//! - Recursive composition of structs and unions via trait implementations
//!
//! User-defined types implement [`Write`] and [`Read`]; [`Encode`] and
//! [`Decode`] are provided for free on top of them.
//!
//! # Example
//!
//! ```
//! use lumen_codec::{Decode, Encode, Error, Read, Reader, Write, Writer};
//!
//! // Define a custom struct
//! #[derive(Debug, Clone, PartialEq)]
//! struct Price {
//!     n: i32,
//!     d: i32,
//! }
//!
//! // Implement the `Write` trait
//! impl Write for Price {
//!     fn write(&self, writer: &mut Writer) {
//!         self.n.write(writer);
//!         self.d.write(writer);
//!     }
//! }
//!
//! // Implement the `Read` trait
//! impl Read for Price {
//!     fn read(reader: &mut Reader<'_>) -> Result<Self, Error> {
//!         let n = i32::read(reader)?;
//!         let d = i32::read(reader)?;
//!         Ok(Self { n, d })
//!     }
//! }
//!
//! let price = Price { n: 3, d: 2 };
//! let encoded = price.encode();
//! assert_eq!(encoded.len(), 8);
//! assert_eq!(Price::decode(&encoded).unwrap(), price);
//! ```
//!
//! # Decoding untrusted input
//!
//! Every decode failure is immediate, synchronous, and carries the byte
//! offset where the malformed input was detected. Length prefixes are
//! validated against schema bounds before any allocation, unknown union
//! discriminants are hard errors rather than defaults, and nesting depth is
//! bounded (see [`DEFAULT_DEPTH_LIMIT`]) so length-prefixed but deeply
//! nested adversarial payloads cannot exhaust the stack.

pub mod codec;
pub mod error;
pub mod reader;
pub mod types;
pub mod writer;

// Re-export main types and traits
pub use codec::{Codec, Decode, Encode, Read, Write};
pub use error::Error;
pub use reader::{Reader, DEFAULT_DEPTH_LIMIT};
pub use types::{bytes::VarOpaque, string::XdrString, vec::VarArray};
pub use writer::Writer;
