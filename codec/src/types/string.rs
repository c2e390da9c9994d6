//! Length-prefixed UTF-8 strings with schema-declared maximum lengths.

use crate::{Error, Read, Reader, Write, Writer};
use std::fmt;

/// An XDR string: 4-byte length prefix, UTF-8 bytes, zero padding.
///
/// `MAX` is the schema-declared maximum byte length. Construction from host
/// strings is checked, so an over-length value is unrepresentable and encode
/// can never emit one; decode validates both the bound and UTF-8.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct XdrString<const MAX: u32 = { u32::MAX }>(String);

impl<const MAX: u32> XdrString<MAX> {
    /// Schema-declared maximum byte length.
    pub const MAX_LEN: u32 = MAX;

    /// Byte length of the string.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the string is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the string contents.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper, returning the owned string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<const MAX: u32> TryFrom<String> for XdrString<MAX> {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Error> {
        let len = u32::try_from(value.len()).expect("string length exceeds u32");
        if len > MAX {
            return Err(Error::LengthExceeded {
                offset: 0,
                len,
                max: MAX,
            });
        }
        Ok(Self(value))
    }
}

impl<const MAX: u32> TryFrom<&str> for XdrString<MAX> {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Error> {
        Self::try_from(value.to_owned())
    }
}

impl<const MAX: u32> AsRef<str> for XdrString<MAX> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<const MAX: u32> fmt::Display for XdrString<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<const MAX: u32> Write for XdrString<MAX> {
    fn write(&self, writer: &mut Writer) {
        writer.put_variable_opaque(self.0.as_bytes());
    }
}

impl<const MAX: u32> Read for XdrString<MAX> {
    fn read(reader: &mut Reader<'_>) -> Result<Self, Error> {
        let offset = reader.position();
        let bytes = reader.get_variable_opaque(MAX)?;
        let value = std::str::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 { offset })?;
        Ok(Self(value.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decode, Encode};

    #[test]
    fn test_round_trip() {
        let values = ["", "a", "hello", "exactly8"];
        for value in values {
            let string = XdrString::<32>::try_from(value).unwrap();
            let encoded = string.encode();
            assert_eq!(encoded.len() % 4, 0);
            assert_eq!(XdrString::<32>::decode(&encoded).unwrap(), string);
        }
    }

    #[test]
    fn test_empty_string_is_bare_prefix() {
        let string = XdrString::<32>::try_from("").unwrap();
        assert_eq!(string.encode().as_ref(), &[0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_padding_bytes() {
        let string = XdrString::<32>::try_from("foo").unwrap();
        assert_eq!(
            string.encode().as_ref(),
            &[0x00, 0x00, 0x00, 0x03, b'f', b'o', b'o', 0x00]
        );
    }

    #[test]
    fn test_construction_bound() {
        assert!(XdrString::<4>::try_from("fits").is_ok());
        assert!(matches!(
            XdrString::<4>::try_from("toolong"),
            Err(Error::LengthExceeded { len: 7, max: 4, .. })
        ));
    }

    #[test]
    fn test_decode_bound() {
        let wire = [0x00, 0x00, 0x00, 0x05, b'h', b'e', b'l', b'l', b'o', 0, 0, 0];
        assert!(XdrString::<5>::decode(&wire).is_ok());
        assert!(matches!(
            XdrString::<4>::decode(&wire),
            Err(Error::LengthExceeded {
                offset: 0,
                len: 5,
                max: 4,
            })
        ));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let wire = [0x00, 0x00, 0x00, 0x02, 0xFF, 0xFE, 0x00, 0x00];
        assert!(matches!(
            XdrString::<32>::decode(&wire),
            Err(Error::InvalidUtf8 { offset: 0 })
        ));
    }
}
