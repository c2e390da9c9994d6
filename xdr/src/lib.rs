//! Stellar XDR type graph.
//!
//! # Overview
//!
//! Concrete Rust types for the structures the Stellar network defines in its
//! `.x` XDR schema: ledger entries and headers, transactions and their 27
//! operation kinds, transaction/operation results, Soroban contract values
//! and authorization, contract interface specs, and the versioned
//! ledger-close-meta envelopes archived to history.
//!
//! Every type composes the [`lumen_codec`] substrate and obeys its
//! round-trip law: `decode(encode(v)) == v`, with encoded lengths always a
//! multiple of 4. Field order and discriminant values come from the schema
//! and are part of the wire format — they are never reordered for ergonomics.
//!
//! # Example
//!
//! ```
//! use lumen_xdr::{Decode, Encode};
//! use lumen_xdr::contract::{Int128Parts, ScVal};
//!
//! let value = ScVal::I128(Int128Parts { hi: 0, lo: 100 });
//! let bytes = value.encode();
//! assert_eq!(bytes.len() % 4, 0);
//! assert_eq!(ScVal::decode(&bytes).unwrap(), value);
//! ```
//!
//! # Decoding untrusted input
//!
//! Unknown union discriminants, out-of-bound lengths, truncated buffers,
//! malformed booleans/flags, invalid UTF-8, and over-deep nesting all fail
//! decode with a typed [`Error`] carrying the byte offset of the failure.
//! A `TransactionEnvelope` pulled from an API response either decodes to
//! exactly what the network signed, or it errors — never a guess.

pub(crate) mod macros;

pub mod base;
pub mod contract;
pub mod contract_spec;
pub mod ledger;
pub mod meta;
pub mod result;
pub mod transaction;

// Re-export the codec substrate: the traits and container types the graph is
// written against.
pub use lumen_codec::{
    Codec, Decode, Encode, Error, Read, Reader, VarArray, VarOpaque, Write, Writer, XdrString,
    DEFAULT_DEPTH_LIMIT,
};

// Flat re-exports: consumers address types by name, as the schema does.
pub use base::*;
pub use contract::*;
pub use contract_spec::*;
pub use ledger::*;
pub use meta::*;
pub use result::*;
pub use transaction::*;
