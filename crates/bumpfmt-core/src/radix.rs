//! Hexadecimal wrapper types.
//!
//! Same dispatch shape as the byte-order wrappers: [`Hex`] and [`UpperHex`]
//! implement `Format` by forwarding to [`HexDigits`], which each unsigned
//! integer type implements. Output is minimal-width hex ASCII with no `0x`
//! prefix; zero renders as `0`.

use crate::digits;
use crate::error::Result;
use crate::format::Format;
use crate::view::BufferView;

/// Unsigned payloads renderable as hex digits.
pub trait HexDigits {
    /// Widened value used for digit generation.
    fn widen(&self) -> u128;
}

macro_rules! impl_hex_digits {
    ($($ty:ty),* $(,)?) => {$(
        impl HexDigits for $ty {
            fn widen(&self) -> u128 {
                *self as u128
            }
        }
    )*};
}

impl_hex_digits!(u8, u16, u32, u64, u128, usize);

impl<T: HexDigits + ?Sized> HexDigits for &T {
    fn widen(&self) -> u128 {
        (**self).widen()
    }
}

/// Lowercase hex (`ff`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Hex<T>(pub T);

/// Uppercase hex (`FF`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct UpperHex<T>(pub T);

fn write_hex(value: u128, uppercase: bool, view: &mut BufferView<'_>) -> Result<usize> {
    let rendered = digits::render(value, 16, uppercase, false);
    view.put_slice(0, rendered.as_bytes())
}

impl<T: HexDigits> Format for Hex<T> {
    fn count(&self) -> usize {
        digits::digit_count(self.0.widen(), 16)
    }

    fn write(&self, mut view: BufferView<'_>) -> Result<usize> {
        write_hex(self.0.widen(), false, &mut view)
    }
}

impl<T: HexDigits> Format for UpperHex<T> {
    fn count(&self) -> usize {
        digits::digit_count(self.0.widen(), 16)
    }

    fn write(&self, mut view: BufferView<'_>) -> Result<usize> {
        write_hex(self.0.widen(), true, &mut view)
    }
}
