//! Creating data in wire format.
//!
//! The wire format produced by this crate is the plain concatenation of
//! field and element encodings in declaration order: scalars occupy their
//! natural width in the requested byte order, sequences are emitted element
//! by element without a length prefix, and composites are flattened without
//! padding or alignment bytes. There is no magic number and no version tag;
//! the consumer of the encoding is expected to know the layout out of band.
//!
//! The [`Serialize`] trait is the engine. Which of its implementations
//! applies to a type decides the type's layout category entirely at compile
//! time:
//!
//! * scalars — the primitive integers, floats, and `bool`;
//! * fixed-length sequences — `[T; N]`;
//! * dynamic sequences — slices, `Vec<T>`, strings, and a number of
//!   feature-gated third-party containers;
//! * composites — types registered via
//!   [`serializable_fields!`][crate::serializable_fields].
//!
//! The [`serialize_into`] function at the end of this module is the entry
//! point tying it all together.

use crate::cursor::{ByteCursor, InsufficientSpace};
use crate::opts::{ByteOrder, SerializeOptions};
use crate::size::SizeClass;
use core::mem;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

//------------ Serialize -----------------------------------------------------

/// A type that knows how to write itself into a byte cursor.
///
/// The trait combines the three per-type facts the engine needs: the
/// statically known size category ([`SIZE`][Self::SIZE]), a measuring pass
/// returning the exact encoded size of a concrete value
/// ([`serialized_len`][Self::serialized_len]), and the recursive write
/// itself ([`serialize`][Self::serialize]).
///
/// Implementations exist for all supported scalar, sequence, and string
/// types. For your own structs, don't implement the trait by hand — declare
/// the field layout through [`serializable_fields!`] and let the macro
/// derive both this trait and [`Composite`].
///
/// [`serializable_fields!`]: crate::serializable_fields
/// [`Composite`]: crate::fields::Composite
pub trait Serialize {
    /// The encoded size category of this type.
    ///
    /// If this is `Fixed(n)`, every value of the type encodes to exactly
    /// `n` bytes and [`serialized_len`][Self::serialized_len] returns `n`
    /// for every value.
    const SIZE: SizeClass;

    /// Returns the exact number of bytes this value encodes to.
    ///
    /// This is a size-only pass: it never touches a destination buffer.
    fn serialized_len(&self) -> usize;

    /// Appends the value's encoding to the cursor.
    ///
    /// On success the cursor has advanced by exactly
    /// [`serialized_len`][Self::serialized_len] bytes. If the encoding
    /// doesn't fit, returns [`InsufficientSpace`]; for values with a
    /// dynamically sized interior the cursor may then have been partially
    /// advanced. Use [`serialize_into`] to get the all-or-nothing
    /// guarantee.
    fn serialize(
        &self,
        cursor: &mut ByteCursor<'_>,
        options: SerializeOptions,
    ) -> Result<(), InsufficientSpace>;
}

impl<'a, T: Serialize + ?Sized> Serialize for &'a T {
    const SIZE: SizeClass = T::SIZE;

    fn serialized_len(&self) -> usize {
        (*self).serialized_len()
    }

    fn serialize(
        &self,
        cursor: &mut ByteCursor<'_>,
        options: SerializeOptions,
    ) -> Result<(), InsufficientSpace> {
        (*self).serialize(cursor, options)
    }
}

//--- impls for scalars

impl Serialize for bool {
    const SIZE: SizeClass = SizeClass::Fixed(1);

    fn serialized_len(&self) -> usize {
        1
    }

    fn serialize(
        &self,
        cursor: &mut ByteCursor<'_>,
        _options: SerializeOptions,
    ) -> Result<(), InsufficientSpace> {
        cursor.append_slice(&[*self as u8])
    }
}

macro_rules! scalar_to_bytes {
    ( $type:ident ) => {
        impl Serialize for $type {
            const SIZE: SizeClass =
                SizeClass::Fixed(mem::size_of::<$type>());

            fn serialized_len(&self) -> usize {
                mem::size_of::<$type>()
            }

            fn serialize(
                &self,
                cursor: &mut ByteCursor<'_>,
                options: SerializeOptions,
            ) -> Result<(), InsufficientSpace> {
                match options.byte_order() {
                    ByteOrder::Native => {
                        cursor.append_slice(&self.to_ne_bytes())
                    }
                    ByteOrder::Big => {
                        cursor.append_slice(&self.to_be_bytes())
                    }
                    ByteOrder::Little => {
                        cursor.append_slice(&self.to_le_bytes())
                    }
                }
            }
        }
    };
}

scalar_to_bytes!(i8);
scalar_to_bytes!(u8);
scalar_to_bytes!(i16);
scalar_to_bytes!(u16);
scalar_to_bytes!(i32);
scalar_to_bytes!(u32);
scalar_to_bytes!(i64);
scalar_to_bytes!(u64);
scalar_to_bytes!(i128);
scalar_to_bytes!(u128);
scalar_to_bytes!(f32);
scalar_to_bytes!(f64);

//--- impls for sequences

impl<T: Serialize> Serialize for [T] {
    const SIZE: SizeClass = SizeClass::Dynamic;

    fn serialized_len(&self) -> usize {
        match T::SIZE {
            SizeClass::Fixed(size) => size * self.len(),
            SizeClass::Dynamic => {
                self.iter().map(Serialize::serialized_len).sum()
            }
        }
    }

    fn serialize(
        &self,
        cursor: &mut ByteCursor<'_>,
        options: SerializeOptions,
    ) -> Result<(), InsufficientSpace> {
        // An upfront check only means something if the element size is
        // fixed. For dynamic elements each element checks for itself.
        if let SizeClass::Fixed(size) = T::SIZE {
            cursor.check_len(size * self.len())?;
        }
        for item in self {
            item.serialize(cursor, options)?;
        }
        Ok(())
    }
}

impl<T: Serialize, const N: usize> Serialize for [T; N] {
    const SIZE: SizeClass = SizeClass::sequence(T::SIZE, N);

    fn serialized_len(&self) -> usize {
        self.as_slice().serialized_len()
    }

    fn serialize(
        &self,
        cursor: &mut ByteCursor<'_>,
        options: SerializeOptions,
    ) -> Result<(), InsufficientSpace> {
        self.as_slice().serialize(cursor, options)
    }
}

#[cfg(feature = "std")]
impl<T: Serialize> Serialize for Vec<T> {
    const SIZE: SizeClass = SizeClass::Dynamic;

    fn serialized_len(&self) -> usize {
        self.as_slice().serialized_len()
    }

    fn serialize(
        &self,
        cursor: &mut ByteCursor<'_>,
        options: SerializeOptions,
    ) -> Result<(), InsufficientSpace> {
        self.as_slice().serialize(cursor, options)
    }
}

#[cfg(feature = "smallvec")]
impl<A> Serialize for smallvec::SmallVec<A>
where
    A: smallvec::Array,
    A::Item: Serialize,
{
    const SIZE: SizeClass = SizeClass::Dynamic;

    fn serialized_len(&self) -> usize {
        self.as_slice().serialized_len()
    }

    fn serialize(
        &self,
        cursor: &mut ByteCursor<'_>,
        options: SerializeOptions,
    ) -> Result<(), InsufficientSpace> {
        self.as_slice().serialize(cursor, options)
    }
}

#[cfg(feature = "heapless")]
impl<T: Serialize, const N: usize> Serialize for heapless::Vec<T, N> {
    const SIZE: SizeClass = SizeClass::Dynamic;

    fn serialized_len(&self) -> usize {
        self.as_slice().serialized_len()
    }

    fn serialize(
        &self,
        cursor: &mut ByteCursor<'_>,
        options: SerializeOptions,
    ) -> Result<(), InsufficientSpace> {
        self.as_slice().serialize(cursor, options)
    }
}

//--- impls for strings and raw bytes
//
// Strings serialize as their UTF-8 bytes. The byte order option doesn't
// apply to individual bytes, so these skip the per-element loop and append
// the whole slice in one go.

impl Serialize for str {
    const SIZE: SizeClass = SizeClass::Dynamic;

    fn serialized_len(&self) -> usize {
        self.len()
    }

    fn serialize(
        &self,
        cursor: &mut ByteCursor<'_>,
        _options: SerializeOptions,
    ) -> Result<(), InsufficientSpace> {
        cursor.append_slice(self.as_bytes())
    }
}

#[cfg(feature = "std")]
impl Serialize for String {
    const SIZE: SizeClass = SizeClass::Dynamic;

    fn serialized_len(&self) -> usize {
        self.len()
    }

    fn serialize(
        &self,
        cursor: &mut ByteCursor<'_>,
        options: SerializeOptions,
    ) -> Result<(), InsufficientSpace> {
        self.as_str().serialize(cursor, options)
    }
}

#[cfg(feature = "bytes")]
impl Serialize for bytes::Bytes {
    const SIZE: SizeClass = SizeClass::Dynamic;

    fn serialized_len(&self) -> usize {
        self.len()
    }

    fn serialize(
        &self,
        cursor: &mut ByteCursor<'_>,
        _options: SerializeOptions,
    ) -> Result<(), InsufficientSpace> {
        cursor.append_slice(self.as_ref())
    }
}

#[cfg(feature = "bytes")]
impl Serialize for bytes::BytesMut {
    const SIZE: SizeClass = SizeClass::Dynamic;

    fn serialized_len(&self) -> usize {
        self.len()
    }

    fn serialize(
        &self,
        cursor: &mut ByteCursor<'_>,
        _options: SerializeOptions,
    ) -> Result<(), InsufficientSpace> {
        cursor.append_slice(self.as_ref())
    }
}

//------------ serialize_into ------------------------------------------------

/// Serializes a value into the beginning of a caller-supplied buffer.
///
/// On success, returns the prefix of `destination` that was written — its
/// length is the value's exact encoded size. On failure, returns
/// [`InsufficientSpace`] and `destination` is byte for byte unmodified:
/// the required size is computed first — from the type if it is fixed,
/// by measuring the value if it is dynamic — and checked against the
/// buffer before anything is written.
///
/// Setting [`skip_size_check`][SerializeOptions::skip_size_check] omits
/// that up-front check. Writes are still bounds checked individually, so
/// the function never writes past the end of `destination`, but a failing
/// call may then have filled a prefix of the buffer before running out of
/// space.
///
/// ```
/// use flatwire::{serialize_into, SerializeOptions};
///
/// let mut buf = [0u8; 8];
/// let opts = SerializeOptions::new().little_endian();
/// let encoded = serialize_into(&0x44556677u32, &mut buf, opts).unwrap();
/// assert_eq!(encoded, [0x77, 0x66, 0x55, 0x44]);
/// ```
pub fn serialize_into<'a, T: Serialize + ?Sized>(
    value: &T,
    destination: &'a mut [u8],
    options: SerializeOptions,
) -> Result<&'a [u8], InsufficientSpace> {
    let mut cursor = ByteCursor::new(destination);
    if !options.skips_size_check() {
        cursor.check_len(value.serialized_len())?;
    }
    value.serialize(&mut cursor, options)?;
    Ok(cursor.into_written())
}

//============ Testing =======================================================
