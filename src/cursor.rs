//! The destination window bytes are written into.
//!
//! A [`ByteCursor`] wraps an exclusively borrowed byte slice — the caller's
//! destination buffer — and remembers how much of it has been consumed.
//! Writing appends at the current position and advances it; the remaining
//! window only ever shrinks. The cursor never allocates, never copies the
//! underlying storage anywhere, and lives only for the duration of a single
//! encode call.
//!
//! All writes are bounds checked. A write that doesn't fit fails with
//! [`InsufficientSpace`] and leaves both the cursor position and the
//! destination contents untouched, so a caller can rely on a failed
//! operation having had no effect.

use core::fmt;

//------------ ByteCursor ----------------------------------------------------

/// A writer over a borrowed, fixed-size destination buffer.
///
/// The cursor keeps the full destination slice and the write position.
/// [`append_slice`][Self::append_slice] is the only way bytes enter the
/// buffer, which is what makes the no-mutation-on-failure guarantee
/// possible: the length check happens before the copy.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    /// The destination buffer.
    buf: &'a mut [u8],

    /// The current write position from the beginning of `buf`.
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a new cursor writing to the beginning of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        ByteCursor { buf, pos: 0 }
    }

    /// Returns the number of bytes written so far.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the length of the underlying destination buffer.
    ///
    /// This is _not_ the space left for writing. Use
    /// [`remaining`][Self::remaining] for that.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns whether the underlying destination buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the number of bytes still available for writing.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Checks that there is room for `len` more bytes.
    pub fn check_len(&self, len: usize) -> Result<(), InsufficientSpace> {
        if self.remaining() < len {
            Err(InsufficientSpace)
        } else {
            Ok(())
        }
    }

    /// Appends the content of a slice at the current position.
    ///
    /// If the slice doesn't fit into the remaining space, returns an error
    /// and leaves the cursor and the destination alone.
    pub fn append_slice(
        &mut self,
        slice: &[u8],
    ) -> Result<(), InsufficientSpace> {
        self.check_len(slice.len())?;
        let end = self.pos + slice.len();
        self.buf[self.pos..end].copy_from_slice(slice);
        self.pos = end;
        Ok(())
    }

    /// Returns the written prefix of the destination buffer.
    pub fn into_written(self) -> &'a mut [u8] {
        let ByteCursor { buf, pos } = self;
        &mut buf[..pos]
    }
}

//============ Error Types ===================================================

//------------ InsufficientSpace ---------------------------------------------

/// An attempt was made to write beyond the end of the destination buffer.
///
/// This is the only error the crate produces: the computed or measured
/// required size of an encoding exceeds the remaining capacity of the
/// destination. Everything else — an invalid field list, say — is a
/// compile-time problem.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InsufficientSpace;

//--- Display and Error

impl fmt::Display for InsufficientSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("destination buffer size exceeded")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InsufficientSpace {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pos_remaining() {
        let mut buf = [0u8; 10];
        let mut cursor = ByteCursor::new(&mut buf);
        assert_eq!(cursor.pos(), 0);
        assert_eq!(cursor.len(), 10);
        assert_eq!(cursor.remaining(), 10);
        assert_eq!(cursor.append_slice(b"012"), Ok(()));
        assert_eq!(cursor.pos(), 3);
        assert_eq!(cursor.len(), 10);
        assert_eq!(cursor.remaining(), 7);
    }

    #[test]
    fn check_len() {
        let mut buf = [0u8; 4];
        let cursor = ByteCursor::new(&mut buf);
        assert_eq!(cursor.check_len(0), Ok(()));
        assert_eq!(cursor.check_len(4), Ok(()));
        assert_eq!(cursor.check_len(5), Err(InsufficientSpace));
    }

    #[test]
    fn append_slice() {
        let mut buf = [0xFEu8; 6];
        let mut cursor = ByteCursor::new(&mut buf);
        assert_eq!(cursor.append_slice(b"0123"), Ok(()));
        assert_eq!(cursor.append_slice(b"456"), Err(InsufficientSpace));
        assert_eq!(cursor.pos(), 4);
        assert_eq!(cursor.append_slice(b"45"), Ok(()));
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.into_written(), b"012345");
        assert_eq!(&buf, b"012345");
    }

    #[test]
    fn failed_append_leaves_buffer_alone() {
        let mut buf = [0u8; 2];
        let mut cursor = ByteCursor::new(&mut buf);
        assert_eq!(cursor.append_slice(b"012"), Err(InsufficientSpace));
        assert_eq!(cursor.pos(), 0);
        assert_eq!(buf, [0, 0]);
    }

    #[test]
    fn empty_destination() {
        let mut buf = [0u8; 0];
        let mut cursor = ByteCursor::new(&mut buf);
        assert!(cursor.is_empty());
        assert_eq!(cursor.append_slice(b""), Ok(()));
        assert_eq!(cursor.append_slice(b"0"), Err(InsufficientSpace));
        assert_eq!(cursor.into_written(), b"");
    }
}
