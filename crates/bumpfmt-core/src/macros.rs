//! Call-site sugar for the write engine.

/// Format a template into a buffer.
///
/// # Usage
///
/// ```
/// let mut buf = [0u8; 32];
/// let n = bumpfmt_core::format_into!(&mut buf, "Value: {}, Count: {}", 42u32, 10u32).unwrap();
/// assert_eq!(&buf[..n], b"Value: 42, Count: 10");
/// ```
///
/// The template may be a `&str` or a byte string. Each argument expression is
/// borrowed and passed as `&dyn Format`. Expands to [`write`](crate::write),
/// so the configured failure policy applies.
#[macro_export]
macro_rules! format_into {
    ($buf:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::write(
            $buf,
            ::core::convert::AsRef::<[u8]>::as_ref($template),
            &[$(&$arg as &dyn $crate::Format),*],
        )
    };
}
