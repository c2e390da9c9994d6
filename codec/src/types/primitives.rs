//! Codec implementations for Rust primitive types.
//!
//! XDR has no encoding narrower than 4 bytes: the smallest integers on the
//! wire are the 32-bit signed and unsigned forms, and booleans travel as a
//! full 4-byte word. Schema fields narrower than that are widened by the
//! schema itself, so only the 32- and 64-bit integers appear here. All values
//! are big-endian (network byte order).
//!
//! 128- and 256-bit integers have no primitive form either: the schema
//! represents them as structs of 64-bit parts (high word first), which
//! compose the integer impls below.

use crate::{Error, Read, Reader, Write, Writer};

// Numeric types implementation
macro_rules! impl_numeric {
    ($type:ty, $get_method:ident, $put_method:ident) => {
        impl Write for $type {
            #[inline]
            fn write(&self, writer: &mut Writer) {
                writer.$put_method(*self);
            }
        }

        impl Read for $type {
            #[inline]
            fn read(reader: &mut Reader<'_>) -> Result<Self, Error> {
                reader.$get_method()
            }
        }
    };
}

impl_numeric!(u32, get_u32, put_u32);
impl_numeric!(i32, get_i32, put_i32);
impl_numeric!(u64, get_u64, put_u64);
impl_numeric!(i64, get_i64, put_i64);

// Bool implementation
impl Write for bool {
    #[inline]
    fn write(&self, writer: &mut Writer) {
        writer.put_bool(*self);
    }
}

impl Read for bool {
    #[inline]
    fn read(reader: &mut Reader<'_>) -> Result<Self, Error> {
        reader.get_bool()
    }
}

// Fixed-count array implementation. The element count is a schema constant:
// no length prefix is written or read, and each element applies its own
// alignment.
impl<T: Write, const N: usize> Write for [T; N] {
    #[inline]
    fn write(&self, writer: &mut Writer) {
        for item in self {
            item.write(writer);
        }
    }
}

impl<T: Read, const N: usize> Read for [T; N] {
    fn read(reader: &mut Reader<'_>) -> Result<Self, Error> {
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(T::read(reader)?);
        }
        match items.try_into() {
            Ok(array) => Ok(array),
            Err(_) => unreachable!("exactly N elements were read"),
        }
    }
}

// Option implementation: a 4-byte presence flag followed by the value only
// when present. Any flag other than 0 or 1 is malformed.
impl<T: Write> Write for Option<T> {
    #[inline]
    fn write(&self, writer: &mut Writer) {
        writer.put_bool(self.is_some());
        if let Some(inner) = self {
            inner.write(writer);
        }
    }
}

impl<T: Read> Read for Option<T> {
    fn read(reader: &mut Reader<'_>) -> Result<Self, Error> {
        let offset = reader.position();
        match reader.get_u32()? {
            0 => Ok(None),
            1 => Ok(Some(T::read(reader)?)),
            value => Err(Error::InvalidPresence { offset, value }),
        }
    }
}

// Box implementation: transparent on the wire. Recursive schema types use
// boxed arms for indirection.
impl<T: Write> Write for Box<T> {
    #[inline]
    fn write(&self, writer: &mut Writer) {
        (**self).write(writer);
    }
}

impl<T: Read> Read for Box<T> {
    #[inline]
    fn read(reader: &mut Reader<'_>) -> Result<Self, Error> {
        Ok(Box::new(T::read(reader)?))
    }
}
