//! # bumpfmt-core
//!
//! Destination-passing template formatting over caller-owned byte buffers.
//!
//! The caller supplies a mutable buffer, a template containing `{}`
//! placeholders, and one [`Format`] argument per placeholder. The engine
//! writes literal bytes and argument bytes directly into the buffer and
//! returns how many bytes it used. Nothing is allocated while formatting;
//! callers size the buffer up front with [`upper_bound`].
//!
//! ```
//! use bumpfmt_core::{BigEndian, write};
//!
//! let mut buf = [0u8; 32];
//! let n = write(&mut buf, b"hello {} world", &[&123u32]).unwrap();
//! assert_eq!(&buf[..n], b"hello 123 world");
//!
//! let n = write(&mut buf, b"{}", &[&BigEndian(0x8081_8283u32)]).unwrap();
//! assert_eq!(&buf[..n], &[0x80, 0x81, 0x82, 0x83]);
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod digits;
pub mod endian;
pub mod engine;
pub mod error;
pub mod format;
mod macros;
pub mod radix;
pub mod view;

pub use config::FailurePolicy;
pub use endian::{BigEndian, ByteOrderFormat, LittleEndian};
pub use engine::{
    PLACEHOLDER, Segment, Segments, literal_len, placeholder_count, upper_bound, write,
    write_view, write_with_policy,
};
pub use error::{FormatError, Result};
pub use format::Format;
pub use radix::{Hex, HexDigits, UpperHex};
pub use view::BufferView;
