//! Options controlling an encode call.
//!
//! [`SerializeOptions`] is a small, copyable bundle of flags handed down
//! through every write of an encode call. It selects the byte order scalars
//! are emitted in and whether the entry point performs its forced size
//! check. Values are immutable; the setters consume and return, so options
//! are assembled in a single expression:
//!
//! ```
//! use flatwire::{ByteOrder, SerializeOptions};
//!
//! let opts = SerializeOptions::new().big_endian();
//! assert_eq!(opts.byte_order(), ByteOrder::Big);
//! ```

//------------ ByteOrder -----------------------------------------------------

/// The byte order multi-byte scalars are written in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ByteOrder {
    /// The byte order of the host.
    ///
    /// This matches the value's in-memory representation and is the
    /// default. It is only a sensible choice if the producer and the
    /// consumer of the encoding are known to agree on their byte order.
    Native,

    /// Most significant byte first.
    Big,

    /// Least significant byte first.
    Little,
}

impl Default for ByteOrder {
    fn default() -> Self {
        ByteOrder::Native
    }
}

//------------ SerializeOptions ----------------------------------------------

/// An immutable set of flags for a single encode call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SerializeOptions {
    /// The byte order for scalar values.
    byte_order: ByteOrder,

    /// Whether [`serialize_into`] skips its forced size check.
    ///
    /// [`serialize_into`]: crate::wire::serialize_into
    skip_size_check: bool,
}

impl SerializeOptions {
    /// Creates the default options: native byte order, size check on.
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the options with the given byte order selected.
    pub fn endianness(self, byte_order: ByteOrder) -> Self {
        SerializeOptions { byte_order, ..self }
    }

    /// Returns the options with big-endian byte order selected.
    pub fn big_endian(self) -> Self {
        self.endianness(ByteOrder::Big)
    }

    /// Returns the options with little-endian byte order selected.
    pub fn little_endian(self) -> Self {
        self.endianness(ByteOrder::Little)
    }

    /// Returns the options with the entry point's size check disabled.
    ///
    /// Only the forced up-front check of [`serialize_into`] is skipped.
    /// The checks the engine itself relies on — for dynamically sized
    /// values — still happen. Note that without the up-front check a
    /// failing call may leave a partially written destination behind; see
    /// [`serialize_into`] for the details.
    ///
    /// [`serialize_into`]: crate::wire::serialize_into
    pub fn skip_size_check(self) -> Self {
        SerializeOptions {
            skip_size_check: true,
            ..self
        }
    }

    /// Returns the selected byte order.
    pub fn byte_order(self) -> ByteOrder {
        self.byte_order
    }

    /// Returns whether the entry point's size check is skipped.
    pub fn skips_size_check(self) -> bool {
        self.skip_size_check
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let opts = SerializeOptions::new();
        assert_eq!(opts.byte_order(), ByteOrder::Native);
        assert!(!opts.skips_size_check());
    }

    #[test]
    fn setters() {
        let opts = SerializeOptions::new().big_endian().skip_size_check();
        assert_eq!(opts.byte_order(), ByteOrder::Big);
        assert!(opts.skips_size_check());
        assert_eq!(
            opts.little_endian().byte_order(),
            ByteOrder::Little
        );
        assert_eq!(
            opts.endianness(ByteOrder::Native).byte_order(),
            ByteOrder::Native
        );
    }
}
