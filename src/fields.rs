//! Declared field layouts for composite types.
//!
//! A composite type takes part in the wire format by declaring an ordered
//! list of its members once, at type-definition time. That list — a slice
//! of [`FieldDescriptor`]s — defines both the traversal order and the wire
//! order; they are always identical. There is no permutation and no
//! padding: the encoding of a composite is exactly the concatenation of
//! its members' encodings in declared order.
//!
//! The easiest way to declare a layout is the [`serializable_fields!`]
//! macro, which implements both [`Composite`] and
//! [`Serialize`][crate::wire::Serialize] for a struct:
//!
//! ```
//! use flatwire::{serialize_into, SerializeOptions};
//!
//! struct Frame {
//!     kind: u8,
//!     payload: [u16; 2],
//! }
//!
//! flatwire::serializable_fields!(Frame => kind, payload);
//!
//! let frame = Frame { kind: 7, payload: [0x1122, 0x3344] };
//! let mut buf = [0u8; 5];
//! let opts = SerializeOptions::new().big_endian();
//! assert_eq!(
//!     serialize_into(&frame, &mut buf, opts).unwrap(),
//!     [7, 0x11, 0x22, 0x33, 0x44]
//! );
//! ```
//!
//! Member pointers don't exist in Rust, so each descriptor instead carries
//! monomorphized function pointers produced from non-capturing closures
//! over one field each. Everything about a field's type — in particular
//! its [`SizeClass`] — is resolved when the descriptor list is built, so
//! encoding never inspects types at runtime.
//!
//! [`serializable_fields!`]: crate::serializable_fields

use crate::cursor::{ByteCursor, InsufficientSpace};
use crate::opts::SerializeOptions;
use crate::size::SizeClass;
use crate::wire::Serialize;

//------------ FieldDescriptor -----------------------------------------------

/// A single member of a composite type's declared layout.
///
/// Descriptors are built in a const context — normally by
/// [`serializable_fields!`][crate::serializable_fields] — and stored in
/// the [`Composite::FIELDS`] list. Each one knows the member type's size
/// class and how to measure and write the member of a concrete value.
pub struct FieldDescriptor<T: ?Sized> {
    /// The size class of the member's type.
    size: SizeClass,

    /// Writes the member of `value` to the cursor.
    serialize: fn(
        &T,
        &mut ByteCursor<'_>,
        SerializeOptions,
    ) -> Result<(), InsufficientSpace>,

    /// Returns the encoded size of the member of `value`.
    serialized_len: fn(&T) -> usize,
}

impl<T: ?Sized> FieldDescriptor<T> {
    /// Creates a descriptor from its parts.
    ///
    /// `size` must be the size class of the member type the two functions
    /// operate on; [`size_class_of`] produces it from the accessor you
    /// already have.
    pub const fn new(
        size: SizeClass,
        serialize: fn(
            &T,
            &mut ByteCursor<'_>,
            SerializeOptions,
        ) -> Result<(), InsufficientSpace>,
        serialized_len: fn(&T) -> usize,
    ) -> Self {
        FieldDescriptor {
            size,
            serialize,
            serialized_len,
        }
    }

    /// Returns the size class of the member's type.
    pub const fn size(&self) -> SizeClass {
        self.size
    }
}

//------------ Composite -----------------------------------------------------

/// A type with a declared, ordered field layout.
///
/// Implementing this trait registers a type with the encoding engine; the
/// companion [`Serialize`] impl is then a thin wrapper around
/// [`serialize_fields`] and [`serialized_fields_len`]. The
/// [`serializable_fields!`][crate::serializable_fields] macro generates
/// both impls; implementing them by hand with an explicit descriptor list
/// works just as well.
pub trait Composite: 'static {
    /// The members of this type in wire order.
    const FIELDS: &'static [FieldDescriptor<Self>];
}

//------------ size_class_of -------------------------------------------------

/// Returns the size class of the type a field accessor yields.
///
/// The accessor is only used to pin down the field type; it is never
/// called.
pub const fn size_class_of<T: ?Sized, F: Serialize + ?Sized>(
    _access: fn(&T) -> &F,
) -> SizeClass {
    F::SIZE
}

//------------ fields_size ---------------------------------------------------

/// Returns the size class of a whole field list.
///
/// The list is fixed with the sum of the member sizes iff every member is
/// fixed; one dynamic member makes the whole composite dynamic.
pub const fn fields_size<T: ?Sized>(
    fields: &[FieldDescriptor<T>],
) -> SizeClass {
    let mut total = 0;
    let mut i = 0;
    while i < fields.len() {
        match fields[i].size {
            SizeClass::Fixed(size) => total += size,
            SizeClass::Dynamic => return SizeClass::Dynamic,
        }
        i += 1;
    }
    SizeClass::Fixed(total)
}

//------------ serialize_fields ----------------------------------------------

/// Writes a value's members to the cursor in declared order.
///
/// If the field list as a whole has a fixed size, the required space is
/// verified up front so a failure cannot leave a partial write behind.
/// Either way, the first failing member aborts the iteration immediately.
pub fn serialize_fields<T: ?Sized>(
    value: &T,
    fields: &[FieldDescriptor<T>],
    cursor: &mut ByteCursor<'_>,
    options: SerializeOptions,
) -> Result<(), InsufficientSpace> {
    if let SizeClass::Fixed(size) = fields_size(fields) {
        cursor.check_len(size)?;
    }
    for field in fields {
        (field.serialize)(value, cursor, options)?;
    }
    Ok(())
}

//------------ serialized_fields_len -----------------------------------------

/// Returns the encoded size of a value with the given field list.
pub fn serialized_fields_len<T: ?Sized>(
    value: &T,
    fields: &[FieldDescriptor<T>],
) -> usize {
    match fields_size(fields) {
        SizeClass::Fixed(size) => size,
        SizeClass::Dynamic => {
            let mut len = 0;
            for field in fields {
                len += (field.serialized_len)(value);
            }
            len
        }
    }
}

//------------ serializable_fields! ------------------------------------------

/// Declares the wire layout of a struct.
///
/// Lists the struct's fields in the order they appear on the wire — which
/// doesn't have to be the order they are declared in the struct — and
/// implements both [`Composite`][crate::Composite] and
/// [`Serialize`][crate::Serialize] accordingly:
///
/// ```
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// flatwire::serializable_fields!(Point => x, y);
/// ```
#[macro_export]
macro_rules! serializable_fields {
    ( $type:ty => $( $field:ident ),+ $(,)? ) => {
        impl $crate::Composite for $type {
            const FIELDS: &'static [$crate::FieldDescriptor<Self>] = &[
                $(
                    $crate::FieldDescriptor::new(
                        $crate::size_class_of(|v: &$type| &v.$field),
                        |v: &$type, cursor, options| {
                            $crate::Serialize::serialize(
                                &v.$field, cursor, options,
                            )
                        },
                        |v: &$type| {
                            $crate::Serialize::serialized_len(&v.$field)
                        },
                    )
                ),+
            ];
        }

        impl $crate::Serialize for $type {
            const SIZE: $crate::SizeClass = $crate::fields_size(
                <$type as $crate::Composite>::FIELDS,
            );

            fn serialized_len(&self) -> usize {
                $crate::serialized_fields_len(
                    self,
                    <$type as $crate::Composite>::FIELDS,
                )
            }

            fn serialize(
                &self,
                cursor: &mut $crate::ByteCursor<'_>,
                options: $crate::SerializeOptions,
            ) -> Result<(), $crate::InsufficientSpace> {
                $crate::serialize_fields(
                    self,
                    <$type as $crate::Composite>::FIELDS,
                    cursor,
                    options,
                )
            }
        }
    };
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::wire::serialize_into;

    struct Flat {
        a: u32,
        b: [u16; 2],
    }

    crate::serializable_fields!(Flat => a, b);

    struct Swapped {
        a: u16,
        b: u16,
    }

    // Wire order deliberately differs from declaration order.
    crate::serializable_fields!(Swapped => b, a);

    struct Nested {
        header: u8,
        inner: Flat,
    }

    crate::serializable_fields!(Nested => header, inner);

    #[cfg(feature = "std")]
    struct Tail {
        count: u16,
        items: std::vec::Vec<u32>,
    }

    #[cfg(feature = "std")]
    crate::serializable_fields!(Tail => count, items);

    #[test]
    fn fixed_composite_size() {
        assert_eq!(Flat::SIZE, SizeClass::Fixed(8));
        assert_eq!(Nested::SIZE, SizeClass::Fixed(9));
        assert_eq!(Flat::FIELDS.len(), 2);
        assert_eq!(Flat::FIELDS[0].size(), SizeClass::Fixed(4));
        assert_eq!(Flat::FIELDS[1].size(), SizeClass::Fixed(4));
    }

    #[test]
    #[cfg(feature = "std")]
    fn dynamic_member_makes_composite_dynamic() {
        assert_eq!(Tail::SIZE, SizeClass::Dynamic);
    }

    #[test]
    fn fields_in_wire_order() {
        let value = Swapped { a: 0x1111, b: 0x2222 };
        let mut buf = [0u8; 4];
        assert_eq!(
            serialize_into(
                &value,
                &mut buf,
                SerializeOptions::new().big_endian()
            ),
            Ok(&[0x22, 0x22, 0x11, 0x11][..])
        );
    }

    #[test]
    fn nested_composite_bytes() {
        let value = Nested {
            header: 0xAB,
            inner: Flat { a: 1, b: [2, 3] },
        };
        assert_eq!(value.serialized_len(), 9);
        let mut buf = [0u8; 9];
        assert_eq!(
            serialize_into(
                &value,
                &mut buf,
                SerializeOptions::new().little_endian()
            ),
            Ok(&[0xAB, 1, 0, 0, 0, 2, 0, 3, 0][..])
        );
    }

    #[test]
    #[cfg(feature = "std")]
    fn dynamic_composite_len_is_measured() {
        let value = Tail {
            count: 2,
            items: std::vec![7, 8],
        };
        assert_eq!(value.serialized_len(), 10);
        assert_eq!(
            Tail {
                count: 0,
                items: std::vec::Vec::new()
            }
            .serialized_len(),
            2
        );
    }

    #[test]
    fn manual_descriptor_list() {
        struct Manual {
            x: u16,
        }

        impl Composite for Manual {
            const FIELDS: &'static [FieldDescriptor<Self>] = &[
                FieldDescriptor::new(
                    size_class_of(|v: &Manual| &v.x),
                    |v, cursor, options| v.x.serialize(cursor, options),
                    |v| v.x.serialized_len(),
                ),
            ];
        }

        assert_eq!(fields_size(Manual::FIELDS), SizeClass::Fixed(2));
        let value = Manual { x: 0x0102 };
        let mut empty = [0u8; 0];
        let mut cursor = ByteCursor::new(&mut empty);
        assert_eq!(
            serialize_fields(
                &value,
                Manual::FIELDS,
                &mut cursor,
                SerializeOptions::new()
            ),
            Err(InsufficientSpace)
        );
        assert_eq!(serialized_fields_len(&value, Manual::FIELDS), 2);
    }
}
