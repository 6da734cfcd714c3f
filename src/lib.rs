//! Flat, positional binary encoding for Rust.
//!
//! This crate converts typed, in-memory values into a flat byte buffer
//! following a declared, ordered field layout. It is meant for producers
//! that feed a fixed protocol buffer or storage record and need the
//! encoding to be predictable and allocation free: the destination is a
//! plain byte slice owned by the caller, every write is bounds checked,
//! and a failed encode leaves the buffer untouched.
//!
//! The wire format is purely positional and packed — fields and elements
//! in declaration order, no length prefixes, no padding, no
//! self-description. Decoding is out of scope; the consumer of the bytes
//! knows the layout out of band.
//!
//! # Example
//!
//! ```
//! use flatwire::{serialize_into, SerializeOptions};
//!
//! struct Sample {
//!     channel: u8,
//!     values: [u32; 2],
//! }
//!
//! flatwire::serializable_fields!(Sample => channel, values);
//!
//! let sample = Sample { channel: 2, values: [1, 2] };
//! let mut buf = [0u8; 16];
//! let opts = SerializeOptions::new().little_endian();
//! let encoded = serialize_into(&sample, &mut buf, opts).unwrap();
//! assert_eq!(encoded, [2, 1, 0, 0, 0, 2, 0, 0, 0]);
//! ```
//!
//! # Modules
//!
//! * [wire] holds the [`Serialize`] trait — the encoding engine — and the
//!   [`serialize_into`] entry point,
//! * [fields] the declaration of composite field layouts,
//! * [cursor] the bounds-checked destination window,
//! * [size] the fixed-versus-dynamic size classification, and
//! * [opts] the per-call options.
//!
//! Everything relevant is re-exported at the crate root.
//!
//! # Reference of Feature Flags
//!
//! The following is the complete list of the feature flags available.
//!
//! * `bytes`: Enables serializing the `Bytes` and `BytesMut` types from
//!   the [bytes](https://github.com/tokio-rs/bytes) crate as dynamic byte
//!   sequences.
//! * `heapless`: Enables serializing the `Vec` type from the
//!   [heapless](https://github.com/rust-embedded/heapless) crate as a
//!   dynamic sequence.
//! * `smallvec`: Enables serializing the `SmallVec` type from the
//!   [smallvec](https://github.com/servo/rust-smallvec) crate as a
//!   dynamic sequence.
//! * `std`: support for the Rust std library, adding impls for `Vec` and
//!   `String`. This feature is enabled by default.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
#[allow(unused_imports)] // Import macros even if unused.
#[macro_use]
extern crate std;

pub mod cursor;
pub mod fields;
pub mod opts;
pub mod size;
pub mod wire;

pub use self::cursor::{ByteCursor, InsufficientSpace};
pub use self::fields::{
    fields_size, serialize_fields, serialized_fields_len, size_class_of,
    Composite, FieldDescriptor,
};
pub use self::opts::{ByteOrder, SerializeOptions};
pub use self::size::SizeClass;
pub use self::wire::{serialize_into, Serialize};
