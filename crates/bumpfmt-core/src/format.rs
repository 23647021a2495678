//! The `Format` capability and its leaf implementations.
//!
//! Every value that can be written into a template implements two
//! operations:
//!
//! - [`Format::count`]: a pure upper bound on the bytes `write` will emit for
//!   this specific value.
//! - [`Format::write`]: emit the bytes at the start of the supplied view and
//!   return the exact number written.
//!
//! Contract: `write(view) <= count()` always, and `write` never touches bytes
//! outside `[0, returned)` of its view. A view too small for the value fails
//! with [`FormatError::OutOfBounds`](crate::FormatError::OutOfBounds); output
//! is never truncated.
//!
//! The trait is object safe so heterogeneous argument lists can be passed as
//! `&[&dyn Format]`.

use crate::digits;
use crate::error::Result;
use crate::view::BufferView;

/// Serialization contract for template arguments.
pub trait Format {
    /// Upper bound on the bytes [`write`](Self::write) produces for this value.
    fn count(&self) -> usize;

    /// Write this value at the start of `view`, returning the bytes written.
    fn write(&self, view: BufferView<'_>) -> Result<usize>;
}

// ---------------------------------------------------------------------------
// Forwarding impls
// ---------------------------------------------------------------------------

impl<T: Format + ?Sized> Format for &T {
    fn count(&self) -> usize {
        (**self).count()
    }

    fn write(&self, view: BufferView<'_>) -> Result<usize> {
        (**self).write(view)
    }
}

impl<T: Format + ?Sized> Format for &mut T {
    fn count(&self) -> usize {
        (**self).count()
    }

    fn write(&self, view: BufferView<'_>) -> Result<usize> {
        (**self).write(view)
    }
}

impl<T: Format + ?Sized> Format for Box<T> {
    fn count(&self) -> usize {
        (**self).count()
    }

    fn write(&self, view: BufferView<'_>) -> Result<usize> {
        (**self).write(view)
    }
}

// ---------------------------------------------------------------------------
// Integers: minimal decimal ASCII
// ---------------------------------------------------------------------------

macro_rules! impl_format_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl Format for $ty {
            fn count(&self) -> usize {
                digits::digit_count(*self as u128, 10)
            }

            fn write(&self, mut view: BufferView<'_>) -> Result<usize> {
                let rendered = digits::render(*self as u128, 10, false, false);
                view.put_slice(0, rendered.as_bytes())
            }
        }
    )*};
}

macro_rules! impl_format_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl Format for $ty {
            fn count(&self) -> usize {
                let sign = usize::from(*self < 0);
                sign + digits::digit_count(self.unsigned_abs() as u128, 10)
            }

            fn write(&self, mut view: BufferView<'_>) -> Result<usize> {
                let rendered =
                    digits::render(self.unsigned_abs() as u128, 10, false, *self < 0);
                view.put_slice(0, rendered.as_bytes())
            }
        }
    )*};
}

impl_format_unsigned!(u8, u16, u32, u64, u128, usize);
impl_format_signed!(i8, i16, i32, i64, i128, isize);

// ---------------------------------------------------------------------------
// Booleans and raw bytes
// ---------------------------------------------------------------------------

impl Format for bool {
    fn count(&self) -> usize {
        if *self { 4 } else { 5 }
    }

    fn write(&self, mut view: BufferView<'_>) -> Result<usize> {
        let text: &[u8] = if *self { b"true" } else { b"false" };
        view.put_slice(0, text)
    }
}

impl Format for [u8] {
    fn count(&self) -> usize {
        self.len()
    }

    fn write(&self, mut view: BufferView<'_>) -> Result<usize> {
        view.put_slice(0, self)
    }
}

impl<const N: usize> Format for [u8; N] {
    fn count(&self) -> usize {
        N
    }

    fn write(&self, mut view: BufferView<'_>) -> Result<usize> {
        view.put_slice(0, self)
    }
}

impl Format for Vec<u8> {
    fn count(&self) -> usize {
        self.len()
    }

    fn write(&self, mut view: BufferView<'_>) -> Result<usize> {
        view.put_slice(0, self)
    }
}

impl Format for str {
    fn count(&self) -> usize {
        self.len()
    }

    fn write(&self, mut view: BufferView<'_>) -> Result<usize> {
        view.put_slice(0, self.as_bytes())
    }
}

impl Format for String {
    fn count(&self) -> usize {
        self.len()
    }

    fn write(&self, mut view: BufferView<'_>) -> Result<usize> {
        view.put_slice(0, self.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;

    fn render(value: &dyn Format, cap: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; cap];
        let n = value.write(BufferView::new(&mut buf))?;
        buf.truncate(n);
        Ok(buf)
    }

    #[test]
    fn unsigned_decimal() {
        assert_eq!(render(&0u8, 8).unwrap(), b"0");
        assert_eq!(render(&42u32, 8).unwrap(), b"42");
        assert_eq!(render(&u64::MAX, 32).unwrap(), b"18446744073709551615");
        assert_eq!(42u32.count(), 2);
        assert_eq!(u64::MAX.count(), 20);
    }

    #[test]
    fn signed_decimal() {
        assert_eq!(render(&-123i32, 8).unwrap(), b"-123");
        assert_eq!((-123i32).count(), 4);
        assert_eq!(render(&i64::MIN, 32).unwrap(), b"-9223372036854775808");
        assert_eq!(i64::MIN.count(), 20);
        assert_eq!(render(&i8::MIN, 8).unwrap(), b"-128");
    }

    #[test]
    fn count_is_exact_for_integers() {
        for v in [0i64, 1, -1, 9, -9, 10, -10, 999_999, -1_000_000] {
            let out = render(&v, 32).unwrap();
            assert_eq!(out.len(), v.count(), "value={v}");
        }
    }

    #[test]
    fn short_view_fails_without_writing() {
        let mut buf = [b'#'; 2];
        let err = 123u16.write(BufferView::new(&mut buf)).unwrap_err();
        assert_eq!(
            err,
            FormatError::OutOfBounds {
                offset: 0,
                needed: 3,
                available: 2
            }
        );
        assert_eq!(&buf, b"##");
    }

    #[test]
    fn bools_and_bytes() {
        assert_eq!(render(&true, 8).unwrap(), b"true");
        assert_eq!(render(&false, 8).unwrap(), b"false");
        assert_eq!(render(&"abc", 8).unwrap(), b"abc");
        assert_eq!(render(&&b"xy"[..], 8).unwrap(), b"xy");
        assert_eq!(render(&[1u8, 2, 3], 8).unwrap(), [1, 2, 3]);
        assert_eq!(render(&String::from("hi"), 8).unwrap(), b"hi");
        assert_eq!(render(&vec![9u8], 8).unwrap(), [9]);
    }

    #[test]
    fn forwarding_impls() {
        let boxed: Box<dyn Format> = Box::new(77u8);
        assert_eq!(boxed.count(), 2);
        assert_eq!(render(&boxed, 4).unwrap(), b"77");
        let r = &&5i16;
        assert_eq!(render(r, 4).unwrap(), b"5");
    }

    #[test]
    fn write_leaves_tail_untouched() {
        let mut buf = [b'.'; 6];
        let n = 42u8.write(BufferView::new(&mut buf)).unwrap();
        assert_eq!(n, 2);
        assert_eq!(&buf, b"42....");
    }
}
