//! Length-prefixed variable arrays with schema-declared maximum counts.

use crate::{Error, Read, Reader, Write, Writer};
use std::ops::Deref;

/// An XDR variable-length array: 4-byte element count, then each element in
/// sequence. Elements apply their own alignment; the array adds no padding
/// of its own.
///
/// `MAX` is the schema-declared maximum element count. Decode validates the
/// transmitted count against it before reading any element, and consumes one
/// unit of the reader's depth budget — recursive schema values nest through
/// arrays, and this is where adversarial nesting is bounded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VarArray<T, const MAX: u32 = { u32::MAX }>(Vec<T>);

impl<T, const MAX: u32> VarArray<T, MAX> {
    /// Schema-declared maximum element count.
    pub const MAX_LEN: u32 = MAX;

    /// Creates an empty array.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the array has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Consumes the wrapper, returning the owned elements.
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T, const MAX: u32> Default for VarArray<T, MAX> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const MAX: u32> TryFrom<Vec<T>> for VarArray<T, MAX> {
    type Error = Error;

    fn try_from(value: Vec<T>) -> Result<Self, Error> {
        let len = u32::try_from(value.len()).expect("array length exceeds u32");
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

impl<T, const MAX: u32> From<VarArray<T, MAX>> for Vec<T> {
    fn from(value: VarArray<T, MAX>) -> Self {
        value.0
    }
}

impl<T, const MAX: u32> Deref for VarArray<T, MAX> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<'a, T, const MAX: u32> IntoIterator for &'a VarArray<T, MAX> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T, const MAX: u32> IntoIterator for VarArray<T, MAX> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T: Write, const MAX: u32> Write for VarArray<T, MAX> {
    fn write(&self, writer: &mut Writer) {
        // Construction already bounded the length.
        writer.put_u32(self.0.len() as u32);
        for item in &self.0 {
            item.write(writer);
        }
    }
}

impl<T: Read, const MAX: u32> Read for VarArray<T, MAX> {
    fn read(reader: &mut Reader<'_>) -> Result<Self, Error> {
        let offset = reader.position();
        let count = reader.get_u32()?;
        if count > MAX {
            return Err(Error::LengthExceeded {
                offset,
                len: count,
                max: MAX,
            });
        }
        // Every element occupies at least four bytes on the wire, so a count
        // implying more elements than the remaining buffer can hold is never
        // allocated for: the loop fails with Truncated first.
        let capacity = (count as usize).min(reader.remaining() / 4);
        reader.nest(|reader| {
            let mut items = Vec::with_capacity(capacity);
            for _ in 0..count {
                items.push(T::read(reader)?);
            }
            Ok(Self(items))
        })
    }
}
