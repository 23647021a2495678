//! Failure-policy configuration.
//!
//! The policy is chosen per call through
//! [`write_with_policy`](crate::write_with_policy):
//! - `leave` (default, and what [`write`](crate::write) uses): bytes written
//!   before the failure stay in the buffer. Callers must treat the buffer
//!   contents as undefined on error.
//! - `scrub`: every byte of the destination buffer is zeroed before the error
//!   is returned, so a failed write never leaves partial output behind.
//!
//! Successful writes are identical under both policies.

/// What happens to the destination buffer when a write fails.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailurePolicy {
    /// Partial output stays in place; contents are unspecified.
    #[default]
    Leave,
    /// The whole destination is zero-filled before the error propagates.
    Scrub,
}

impl FailurePolicy {
    /// Parse from string (case-insensitive). Unknown values fall back to `Leave`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "scrub" | "zero" | "wipe" | "clear" => Self::Scrub,
            _ => Self::Leave,
        }
    }

    /// Stable lowercase name, the inverse of [`from_str_loose`](Self::from_str_loose).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Leave => "leave",
            Self::Scrub => "scrub",
        }
    }

    /// Returns true if failed writes zero the destination.
    #[must_use]
    pub const fn scrubs(self) -> bool {
        matches!(self, Self::Scrub)
    }
}
