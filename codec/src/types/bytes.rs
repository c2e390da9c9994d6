//! Length-prefixed variable opaque data with schema-declared maximum lengths.

use crate::{Error, Read, Reader, Write, Writer};
use std::ops::Deref;

/// An XDR variable-length opaque: 4-byte length prefix, raw bytes, zero
/// padding.
///
/// `MAX` is the schema-declared maximum byte length. As with
/// [`crate::XdrString`], construction is checked so encode cannot emit an
/// over-length value; decode validates the declared length before consuming
/// the body.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarOpaque<const MAX: u32 = { u32::MAX }>(Vec<u8>);

impl<const MAX: u32> VarOpaque<MAX> {
    /// Schema-declared maximum byte length.
    pub const MAX_LEN: u32 = MAX;

    /// Byte length of the data.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the data is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the data.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the wrapper, returning the owned bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl<const MAX: u32> TryFrom<Vec<u8>> for VarOpaque<MAX> {
    type Error = Error;

    fn try_from(value: Vec<u8>) -> Result<Self, Error> {
        let len = u32::try_from(value.len()).expect("opaque length exceeds u32");
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

impl<const MAX: u32> TryFrom<&[u8]> for VarOpaque<MAX> {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Error> {
        Self::try_from(value.to_vec())
    }
}

impl<const MAX: u32> AsRef<[u8]> for VarOpaque<MAX> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const MAX: u32> Deref for VarOpaque<MAX> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl<const MAX: u32> Write for VarOpaque<MAX> {
    fn write(&self, writer: &mut Writer) {
        writer.put_variable_opaque(&self.0);
    }
}

impl<const MAX: u32> Read for VarOpaque<MAX> {
    fn read(reader: &mut Reader<'_>) -> Result<Self, Error> {
        let bytes = reader.get_variable_opaque(MAX)?;
        Ok(Self(bytes.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decode, Encode};

    #[test]
    fn test_round_trip() {
        let values: [&[u8]; 4] = [&[], &[1], &[1, 2, 3], &[0; 300]];
        for value in values {
            let opaque = VarOpaque::<300>::try_from(value).unwrap();
            let encoded = opaque.encode();
            assert_eq!(encoded.len() % 4, 0);
            assert_eq!(VarOpaque::<300>::decode(&encoded).unwrap(), opaque);
        }
    }

    #[test]
    fn test_conformity() {
        let opaque = VarOpaque::<8>::try_from(&[0xDE, 0xAD, 0xBE][..]).unwrap();
        assert_eq!(
            opaque.encode().as_ref(),
            &[0x00, 0x00, 0x00, 0x03, 0xDE, 0xAD, 0xBE, 0x00]
        );
    }

    #[test]
    fn test_bounds() {
        assert!(VarOpaque::<2>::try_from(&[1, 2, 3][..]).is_err());

        let wire = [0x00, 0x00, 0x00, 0x03, 1, 2, 3, 0];
        assert!(VarOpaque::<3>::decode(&wire).is_ok());
        assert!(matches!(
            VarOpaque::<2>::decode(&wire),
            Err(Error::LengthExceeded {
                offset: 0,
                len: 3,
                max: 2,
            })
        ));
    }
}
