//! Integer-to-ASCII digit rendering.
//!
//! Digits are rendered right-aligned into a fixed stack scratch array and
//! then copied into the destination view in one bounded write, so a view
//! that is too small is rejected before any byte lands.

/// Scratch size: `u128::MAX` in base 2 is 128 digits, plus one sign byte.
pub const MAX_DIGITS: usize = 129;

/// Right-aligned digit scratch for one rendered integer.
#[derive(Debug, Clone, Copy)]
pub struct Digits {
    buf: [u8; MAX_DIGITS],
    pos: usize,
}

impl Digits {
    /// The rendered bytes (sign included when present).
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    /// Number of rendered bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        MAX_DIGITS - self.pos
    }

    /// Always false: zero renders as `"0"`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pos == MAX_DIGITS
    }
}

/// Render `value` in `base` (2..=16), optionally prefixed by `-`.
#[must_use]
pub fn render(mut value: u128, base: u32, uppercase: bool, negative: bool) -> Digits {
    debug_assert!((2..=16).contains(&base));
    let base = u128::from(base);
    let alpha = if uppercase { b'A' } else { b'a' };
    let mut buf = [0u8; MAX_DIGITS];
    let mut pos = MAX_DIGITS;

    if value == 0 {
        pos -= 1;
        buf[pos] = b'0';
    }
    while value > 0 {
        pos -= 1;
        let digit = (value % base) as u8;
        buf[pos] = if digit < 10 {
            b'0' + digit
        } else {
            alpha + (digit - 10)
        };
        value /= base;
    }
    if negative {
        pos -= 1;
        buf[pos] = b'-';
    }
    Digits { buf, pos }
}

/// Number of digits `value` needs in `base`, without rendering it.
#[must_use]
pub fn digit_count(mut value: u128, base: u32) -> usize {
    let base = u128::from(base);
    let mut count = 1;
    while value >= base {
        value /= base;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_renders_single_digit() {
        let d = render(0, 10, false, false);
        assert_eq!(d.as_bytes(), b"0");
        assert_eq!(d.len(), 1);
        assert!(!d.is_empty());
    }

    #[test]
    fn decimal_and_negative() {
        assert_eq!(render(123, 10, false, false).as_bytes(), b"123");
        assert_eq!(render(42, 10, false, true).as_bytes(), b"-42");
    }

    #[test]
    fn hex_case() {
        assert_eq!(render(0xdead, 16, false, false).as_bytes(), b"dead");
        assert_eq!(render(0xBEEF, 16, true, false).as_bytes(), b"BEEF");
        assert_eq!(render(8, 8, false, false).as_bytes(), b"10");
    }

    #[test]
    fn extremes_fit_scratch() {
        let max = render(u128::MAX, 10, false, false);
        assert_eq!(max.as_bytes(), b"340282366920938463463374607431768211455");
        let min = render(i128::MIN.unsigned_abs(), 10, false, true);
        assert_eq!(min.len(), 40);
        assert_eq!(min.as_bytes()[0], b'-');
    }

    #[test]
    fn digit_count_matches_render() {
        for value in [0u128, 9, 10, 99, 100, 12345, u64::MAX as u128, u128::MAX] {
            for base in [2u32, 8, 10, 16] {
                assert_eq!(
                    digit_count(value, base),
                    render(value, base, false, false).len(),
                    "value={value} base={base}"
                );
            }
        }
    }
}
