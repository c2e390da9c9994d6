//! Declarative generators for the XDR type graph.
//!
//! The network's `.x` schema defines hundreds of structs, enums, and
//! discriminated unions whose encode/decode pairs are entirely mechanical:
//! fields in declaration order, enums as validated `i32` words, unions as a
//! discriminant followed by the active arm. These macros keep each type's
//! wire contract in exactly one place — the declaration — so field order and
//! discriminant mappings cannot drift between the encode and decode paths.
//!
//! Schema fidelity rules enforced here:
//! - Enum decode validates the raw `i32` against the declared variant set;
//!   anything else is [`crate::Error::InvalidDiscriminant`].
//! - Union decode dispatches on the decoded discriminant through an
//!   exhaustive match with a mandatory error arm, so a discriminant the union
//!   does not cover (including declared enum values without an arm) fails
//!   decode instead of defaulting.
//! - Union payload decode runs under [`crate::Reader::nest`], bounding how
//!   deeply adversarial input can recurse.

/// Generates a C-like enum with explicit `i32` wire values and its codec
/// impls.
macro_rules! xdr_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )*
        }

        impl $crate::Write for $name {
            fn write(&self, writer: &mut $crate::Writer) {
                writer.put_i32(*self as i32);
            }
        }

        impl $crate::Read for $name {
            fn read(reader: &mut $crate::Reader<'_>) -> Result<Self, $crate::Error> {
                let offset = reader.position();
                match reader.get_i32()? {
                    $( $value => Ok($name::$variant), )*
                    value => Err($crate::Error::InvalidDiscriminant {
                        offset,
                        ty: stringify!($name),
                        value,
                    }),
                }
            }
        }
    };
}

/// Generates a struct whose codec impls visit each field in declaration
/// order. Field order is part of the wire format and mirrors the schema.
macro_rules! xdr_struct {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident: $fty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $fty,
            )*
        }

        impl $crate::Write for $name {
            fn write(&self, writer: &mut $crate::Writer) {
                $( $crate::Write::write(&self.$field, writer); )*
            }
        }

        impl $crate::Read for $name {
            fn read(reader: &mut $crate::Reader<'_>) -> Result<Self, $crate::Error> {
                Ok(Self {
                    $( $field: $crate::Read::read(reader)?, )*
                })
            }
        }
    };
}

/// Generates a fixed-width opaque newtype (hashes, keys, codes): the bytes
/// travel bare, zero-padded to alignment, with no length prefix.
macro_rules! xdr_fixed_opaque {
    (
        $(#[$meta:meta])*
        pub struct $name:ident([u8; $len:literal]);
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            /// Width of the opaque data in bytes.
            pub const LEN: usize = $len;
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl $crate::Write for $name {
            fn write(&self, writer: &mut $crate::Writer) {
                writer.put_fixed_opaque(&self.0);
            }
        }

        impl $crate::Read for $name {
            fn read(reader: &mut $crate::Reader<'_>) -> Result<Self, $crate::Error> {
                let bytes = reader.get_fixed_opaque($len)?;
                let mut data = [0u8; $len];
                data.copy_from_slice(bytes);
                Ok(Self(data))
            }
        }
    };
}

/// Generates a union switched on an [`xdr_enum!`] discriminant.
///
/// Arms are `Discriminant::Tag => Variant(Payload)` or, for void arms,
/// `Discriminant::Tag => Variant`. The union need not cover every declared
/// enum value: uncovered discriminants fail decode with the union's type
/// name.
macro_rules! xdr_union {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $disc:ty {
            $(
                $(#[$vmeta:meta])*
                $tag:path => $variant:ident $( ( $payload:ty ) )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant $( ( $payload ) )?,
            )*
        }

        impl $crate::Write for $name {
            fn write(&self, writer: &mut $crate::Writer) {
                let this = self;
                $crate::macros::xdr_union!(
                    @write_arms this, writer, $name, $disc, [];
                    $( $tag => $variant $( ( $payload ) )? ,)*
                );
            }
        }

        impl $crate::Read for $name {
            fn read(reader: &mut $crate::Reader<'_>) -> Result<Self, $crate::Error> {
                let offset = reader.position();
                let discriminant = <$disc as $crate::Read>::read(reader)?;
                // Void-only unions never touch the reader inside the arms.
                reader.nest(|_reader| match discriminant {
                    $(
                        $tag => Ok($name::$variant $( ( <$payload as $crate::Read>::read(_reader)? ) )? ),
                    )*
                    #[allow(unreachable_patterns)]
                    other => Err($crate::Error::InvalidDiscriminant {
                        offset,
                        ty: stringify!($name),
                        value: other as i32,
                    }),
                })
            }
        }
    };

    // Internal: accumulate the write-side dispatch one arm at a time, since
    // void and payload arms expand to different match patterns.
    (@write_arms $this:ident, $writer:ident, $name:ident, $disc:ty, [$($done:tt)*]; ) => {
        match $this {
            $($done)*
        }
    };
    (@write_arms $this:ident, $writer:ident, $name:ident, $disc:ty, [$($done:tt)*];
        $tag:path => $variant:ident , $($rest:tt)*
    ) => {
        $crate::macros::xdr_union!(@write_arms $this, $writer, $name, $disc, [
            $($done)*
            $name::$variant => {
                <$disc as $crate::Write>::write(&$tag, $writer);
            }
        ]; $($rest)*)
    };
    (@write_arms $this:ident, $writer:ident, $name:ident, $disc:ty, [$($done:tt)*];
        $tag:path => $variant:ident ( $payload:ty ) , $($rest:tt)*
    ) => {
        $crate::macros::xdr_union!(@write_arms $this, $writer, $name, $disc, [
            $($done)*
            $name::$variant(value) => {
                <$disc as $crate::Write>::write(&$tag, $writer);
                $crate::Write::write(value, $writer);
            }
        ]; $($rest)*)
    };
}

/// Generates a union switched on a raw `int` discriminant — the schema's
/// `switch (int v)` construct used by extension slots and versioned
/// envelopes.
macro_rules! xdr_union_int {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $tag:literal => $variant:ident $( ( $payload:ty ) )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant $( ( $payload ) )?,
            )*
        }

        impl $crate::Write for $name {
            fn write(&self, writer: &mut $crate::Writer) {
                let this = self;
                $crate::macros::xdr_union_int!(
                    @write_arms this, writer, $name, [];
                    $( $tag => $variant $( ( $payload ) )? ,)*
                );
            }
        }

        impl $crate::Read for $name {
            fn read(reader: &mut $crate::Reader<'_>) -> Result<Self, $crate::Error> {
                let offset = reader.position();
                let discriminant = reader.get_i32()?;
                // Void-only unions never touch the reader inside the arms.
                reader.nest(|_reader| match discriminant {
                    $(
                        $tag => Ok($name::$variant $( ( <$payload as $crate::Read>::read(_reader)? ) )? ),
                    )*
                    value => Err($crate::Error::InvalidDiscriminant {
                        offset,
                        ty: stringify!($name),
                        value,
                    }),
                })
            }
        }
    };

    (@write_arms $this:ident, $writer:ident, $name:ident, [$($done:tt)*]; ) => {
        match $this {
            $($done)*
        }
    };
    (@write_arms $this:ident, $writer:ident, $name:ident, [$($done:tt)*];
        $tag:literal => $variant:ident , $($rest:tt)*
    ) => {
        $crate::macros::xdr_union_int!(@write_arms $this, $writer, $name, [
            $($done)*
            $name::$variant => {
                $writer.put_i32($tag);
            }
        ]; $($rest)*)
    };
    (@write_arms $this:ident, $writer:ident, $name:ident, [$($done:tt)*];
        $tag:literal => $variant:ident ( $payload:ty ) , $($rest:tt)*
    ) => {
        $crate::macros::xdr_union_int!(@write_arms $this, $writer, $name, [
            $($done)*
            $name::$variant(value) => {
                $writer.put_i32($tag);
                $crate::Write::write(value, $writer);
            }
        ]; $($rest)*)
    };
}

pub(crate) use {xdr_enum, xdr_fixed_opaque, xdr_struct, xdr_union, xdr_union_int};
