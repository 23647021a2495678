//! Byte-order wrapper types.
//!
//! `Format` may be implemented only once per type, and the integers already
//! use it for decimal ASCII. Raw big-endian and little-endian encodings are
//! therefore selected through wrapper types: [`BigEndian`] and
//! [`LittleEndian`] implement [`Format`] by forwarding to the narrower
//! [`ByteOrderFormat`] trait, which carries the per-type encoding. The
//! wrapper, not the payload type, is the dispatch key, so both families can
//! coexist for the same payload.
//!
//! For an N-byte payload, `count()` is exactly N and `write` emits exactly N
//! bytes, or fails with `OutOfBounds` when the view holds fewer than N.

use crate::error::Result;
use crate::format::Format;
use crate::view::BufferView;

/// Fixed-width raw encoding in either byte order.
pub trait ByteOrderFormat {
    /// Encoded size in bytes.
    const WIDTH: usize;

    /// Encoded byte array type, `[u8; WIDTH]` for the built-in impls.
    type Bytes: AsRef<[u8]>;

    /// Most-significant byte first.
    fn to_be(&self) -> Self::Bytes;

    /// Least-significant byte first.
    fn to_le(&self) -> Self::Bytes;
}

macro_rules! impl_byte_order {
    ($($ty:ty),* $(,)?) => {$(
        impl ByteOrderFormat for $ty {
            const WIDTH: usize = core::mem::size_of::<$ty>();
            type Bytes = [u8; core::mem::size_of::<$ty>()];

            fn to_be(&self) -> Self::Bytes {
                self.to_be_bytes()
            }

            fn to_le(&self) -> Self::Bytes {
                self.to_le_bytes()
            }
        }
    )*};
}

impl_byte_order!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);

impl<T: ByteOrderFormat + ?Sized> ByteOrderFormat for &T {
    const WIDTH: usize = T::WIDTH;
    type Bytes = T::Bytes;

    fn to_be(&self) -> Self::Bytes {
        (**self).to_be()
    }

    fn to_le(&self) -> Self::Bytes {
        (**self).to_le()
    }
}

/// Formats the wrapped value as raw big-endian bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct BigEndian<T>(pub T);

/// Formats the wrapped value as raw little-endian bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct LittleEndian<T>(pub T);

impl<T: ByteOrderFormat> Format for BigEndian<T> {
    fn count(&self) -> usize {
        T::WIDTH
    }

    fn write(&self, mut view: BufferView<'_>) -> Result<usize> {
        view.put_slice(0, self.0.to_be().as_ref())
    }
}

impl<T: ByteOrderFormat> Format for LittleEndian<T> {
    fn count(&self) -> usize {
        T::WIDTH
    }

    fn write(&self, mut view: BufferView<'_>) -> Result<usize> {
        view.put_slice(0, self.0.to_le().as_ref())
    }
}
