//! The write cursor all encoders append through.
//!
//! XDR (RFC 4506) output is big-endian and 4-byte aligned: every item
//! occupies a multiple of four bytes, with opaque data zero-padded up to the
//! next boundary. The [`Writer`] is the only place padding is produced, so a
//! complete top-level encode always ends on an aligned length.

use bytes::{BufMut, Bytes, BytesMut};

/// Returns the number of zero bytes needed to pad `len` to a 4-byte boundary.
#[inline]
pub(crate) const fn pad_len(len: usize) -> usize {
    (4 - (len % 4)) % 4
}

/// A growable byte buffer with XDR primitive append operations.
///
/// Created per encode operation; the final buffer is extracted with
/// [`Writer::finish`]. Writers are cheap and single-use — distinct encode
/// calls use distinct writers and share nothing.
#[derive(Debug, Default)]
pub struct Writer {
    buf: BytesMut,
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self {
            buf: BytesMut::new(),
        }
    }

    /// Creates a writer with `capacity` bytes preallocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Appends a 32-bit unsigned integer in network byte order.
    #[inline]
    pub fn put_u32(&mut self, value: u32) {
        self.buf.put_u32(value);
    }

    /// Appends a 32-bit signed integer in network byte order.
    #[inline]
    pub fn put_i32(&mut self, value: i32) {
        self.buf.put_i32(value);
    }

    /// Appends a 64-bit unsigned integer in network byte order.
    #[inline]
    pub fn put_u64(&mut self, value: u64) {
        self.buf.put_u64(value);
    }

    /// Appends a 64-bit signed integer in network byte order.
    #[inline]
    pub fn put_i64(&mut self, value: i64) {
        self.buf.put_i64(value);
    }

    /// Appends a boolean as a 4-byte word: 1 for true, 0 for false.
    #[inline]
    pub fn put_bool(&mut self, value: bool) {
        self.put_u32(value as u32);
    }

    /// Appends fixed-length opaque data: the bytes themselves, zero-padded to
    /// the next 4-byte boundary. No length prefix is written — the width is a
    /// schema constant known to both sides.
    pub fn put_fixed_opaque(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
        self.buf.put_bytes(0, pad_len(bytes.len()));
    }

    /// Appends variable-length opaque data: a 4-byte length prefix, the
    /// bytes, and zero padding to the next 4-byte boundary.
    ///
    /// Panics if the length does not fit a `u32` — callers control encoded
    /// values, so an oversized buffer is a programming error.
    pub fn put_variable_opaque(&mut self, bytes: &[u8]) {
        let len = u32::try_from(bytes.len()).expect("opaque length exceeds u32");
        self.put_u32(len);
        self.put_fixed_opaque(bytes);
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Extracts the accumulated bytes.
    ///
    /// Only called once encoding is complete; the total length of a complete
    /// top-level encode is always a multiple of 4 (XDR alignment invariant).
    pub fn finish(self) -> Bytes {
        debug_assert_eq!(self.buf.len() % 4, 0, "encoded length not 4-byte aligned");
        self.buf.freeze()
    }
}
