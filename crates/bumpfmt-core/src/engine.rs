//! Template write engine.
//!
//! A template is a byte string in which the two-byte token `{}` marks where
//! the next argument goes. There is no escape syntax and no format-spec
//! syntax: every `{}` is a placeholder, every other byte is literal.
//!
//! The engine makes one forward pass. Literal runs are copied verbatim at the
//! current offset; each placeholder hands the view `[offset, end)` to the
//! next argument's [`Format::write`] and advances the offset by the returned
//! count. Arguments are consumed strictly left to right, one per placeholder.
//!
//! Nothing is pre-validated: buffer exhaustion surfaces as
//! [`FormatError::OutOfBounds`] at the write that hits it, and an argument
//! shortfall or surplus surfaces as
//! [`FormatError::PlaceholderCountMismatch`] when it is discovered.

use crate::config::FailurePolicy;
use crate::error::{FormatError, Result};
use crate::format::Format;
use crate::view::BufferView;

/// The placeholder token.
pub const PLACEHOLDER: &[u8; 2] = b"{}";

// ---------------------------------------------------------------------------
// Template scanning
// ---------------------------------------------------------------------------

/// A piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'t> {
    /// Bytes to copy verbatim. Never empty.
    Literal(&'t [u8]),
    /// A `{}` token.
    Placeholder,
}

/// Allocation-free iterator over the segments of a template.
#[derive(Debug, Clone)]
pub struct Segments<'t> {
    template: &'t [u8],
    pos: usize,
}

impl<'t> Segments<'t> {
    /// Start scanning `template` from its first byte.
    #[must_use]
    pub fn new(template: &'t [u8]) -> Self {
        Self { template, pos: 0 }
    }
}

impl<'t> Iterator for Segments<'t> {
    type Item = Segment<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let template = self.template;
        let rest = template.get(self.pos..)?;
        if rest.is_empty() {
            return None;
        }
        if rest.starts_with(PLACEHOLDER) {
            self.pos += PLACEHOLDER.len();
            return Some(Segment::Placeholder);
        }
        // Literal run up to the next token or the end of the template.
        let run = rest
            .windows(PLACEHOLDER.len())
            .position(|w| w == PLACEHOLDER)
            .unwrap_or(rest.len());
        self.pos += run;
        Some(Segment::Literal(&rest[..run]))
    }
}

/// Number of `{}` tokens in `template`.
#[must_use]
pub fn placeholder_count(template: &[u8]) -> usize {
    Segments::new(template)
        .filter(|s| matches!(s, Segment::Placeholder))
        .count()
}

/// Total literal bytes in `template` (everything except the tokens).
#[must_use]
pub fn literal_len(template: &[u8]) -> usize {
    Segments::new(template)
        .map(|s| match s {
            Segment::Literal(bytes) => bytes.len(),
            Segment::Placeholder => 0,
        })
        .sum()
}

/// Buffer size that always suffices for `template` with `arguments`.
///
/// Literal bytes plus the sum of every argument's `count()`. Only meaningful
/// when the argument count matches [`placeholder_count`]; the write still
/// fails with a count mismatch otherwise. Saturates at `usize::MAX`.
#[must_use]
pub fn upper_bound(template: &[u8], arguments: &[&dyn Format]) -> usize {
    arguments
        .iter()
        .fold(literal_len(template), |total, a| total.saturating_add(a.count()))
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Format `template` with `arguments` into `buffer`, returning the bytes written.
///
/// The written output is `buffer[..n]`. On failure, bytes written before the
/// failing step stay in place ([`FailurePolicy::Leave`]); use
/// [`write_with_policy`] to scrub instead.
pub fn write(buffer: &mut [u8], template: &[u8], arguments: &[&dyn Format]) -> Result<usize> {
    write_with_policy(FailurePolicy::Leave, buffer, template, arguments)
}

/// [`write`] with an explicit failure policy.
pub fn write_with_policy(
    policy: FailurePolicy,
    buffer: &mut [u8],
    template: &[u8],
    arguments: &[&dyn Format],
) -> Result<usize> {
    let result = write_view(BufferView::new(buffer), template, arguments);
    if result.is_err() && policy.scrubs() {
        buffer.fill(0);
    }
    result
}

/// Format into an existing view.
///
/// This is the composable form: a `Format` implementation can call it on the
/// view it was handed to render a nested template.
pub fn write_view(
    mut view: BufferView<'_>,
    template: &[u8],
    arguments: &[&dyn Format],
) -> Result<usize> {
    let mut offset = 0;
    let mut next_arg = 0;

    for segment in Segments::new(template) {
        match segment {
            Segment::Literal(bytes) => {
                offset += view.put_slice(offset, bytes)?;
            }
            Segment::Placeholder => {
                let Some(arg) = arguments.get(next_arg) else {
                    return Err(count_mismatch(template, arguments.len()));
                };
                let sub = view.slice_from(offset)?;
                let (start, room) = (sub.start(), sub.len());
                let written = arg.write(sub)?;
                // An argument cannot claim more bytes than the view it was given.
                if written > room {
                    return Err(FormatError::OutOfBounds {
                        offset: start,
                        needed: written,
                        available: room,
                    });
                }
                offset += written;
                next_arg += 1;
            }
        }
    }

    if next_arg < arguments.len() {
        return Err(count_mismatch(template, arguments.len()));
    }
    Ok(offset)
}

fn count_mismatch(template: &[u8], arguments: usize) -> FormatError {
    FormatError::PlaceholderCountMismatch {
        placeholders: placeholder_count(template),
        arguments,
    }
}
