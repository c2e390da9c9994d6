//! Core codec traits.

use crate::{error::Error, reader::Reader, writer::Writer};
use bytes::Bytes;

/// Trait for types that can be written (encoded) to a [`Writer`].
///
/// Writing is infallible: every representable value has exactly one wire
/// form. Contract violations on the encode side (caller-supplied data that
/// cannot be framed) panic rather than error.
pub trait Write {
    /// Encodes this value by appending to `writer`.
    fn write(&self, writer: &mut Writer);
}

/// Trait for types that can be read (decoded) from a [`Reader`].
///
/// Reading untrusted input is fallible; implementations consume exactly the
/// bytes their wire form occupies and propagate the first failure to the
/// caller without constructing a partial value.
pub trait Read: Sized {
    /// Reads a value from `reader`, consuming the necessary bytes.
    fn read(reader: &mut Reader<'_>) -> Result<Self, Error>;
}

/// Trait for types that can be encoded to a standalone buffer.
pub trait Encode: Write {
    /// Encodes a value to a fresh buffer.
    ///
    /// The returned buffer's length is always a multiple of 4 (XDR
    /// alignment).
    ///
    /// (Provided method).
    fn encode(&self) -> Bytes {
        let mut writer = Writer::new();
        self.write(&mut writer);
        writer.finish()
    }
}

// Automatically implement `Encode` for types that implement `Write`.
impl<T: Write> Encode for T {}

/// Trait for types that can be decoded from a buffer, ensuring the entire
/// buffer is consumed.
pub trait Decode: Read {
    /// Decodes a value from `buf`, failing with [`Error::ExtraData`] if any
    /// bytes are left over.
    ///
    /// (Provided method).
    fn decode(buf: &[u8]) -> Result<Self, Error> {
        Self::decode_from(Reader::new(buf))
    }

    /// Decodes with an explicit nesting budget instead of
    /// [`crate::DEFAULT_DEPTH_LIMIT`].
    ///
    /// (Provided method).
    fn decode_with_depth_limit(buf: &[u8], depth: u32) -> Result<Self, Error> {
        Self::decode_from(Reader::with_depth_limit(buf, depth))
    }

    /// Decodes from a configured reader, ensuring full consumption.
    ///
    /// (Provided method).
    fn decode_from(mut reader: Reader<'_>) -> Result<Self, Error> {
        let value = Self::read(&mut reader)?;
        let remaining = reader.remaining();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }
        Ok(value)
    }
}

// Automatically implement `Decode` for types that implement `Read`.
impl<T: Read> Decode for T {}

/// Trait for types that can be encoded and decoded.
pub trait Codec: Encode + Decode {}

// Automatically implement `Codec` for types that implement `Encode` and `Decode`.
impl<T: Encode + Decode> Codec for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_insufficient_buffer() {
        let mut reader = Reader::new(&[0x01, 0x02]);
        assert!(matches!(
            u32::read(&mut reader),
            Err(Error::Truncated { .. })
        ));
    }

    #[test]
    fn test_extra_data() {
        let encoded = [0x00, 0x00, 0x00, 0x01, 0xFF];
        assert!(matches!(u32::decode(&encoded), Err(Error::ExtraData(1))));
    }

    #[test]
    fn test_encode_alignment() {
        let encoded = 7u64.encode();
        assert_eq!(encoded.len() % 4, 0);
        assert_eq!(u64::decode(&encoded).unwrap(), 7);
    }
}
