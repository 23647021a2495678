//! Harness error type.

use std::path::PathBuf;

use bumpfmt_core::FormatError;
use thiserror::Error;

/// Errors raised while loading fixtures or decoding arguments.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid fixture JSON in {}: {source}", .path.display())]
    Fixture {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid argument '{raw}': {reason}")]
    Argument { raw: String, reason: String },

    #[error("invalid hex string '{input}': {source}")]
    Hex {
        input: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("no fixture JSON files found in {}", .0.display())]
    NoFixtures(PathBuf),

    #[error(transparent)]
    Format(#[from] FormatError),
}

impl HarnessError {
    pub(crate) fn argument(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Argument {
            raw: raw.into(),
            reason: reason.into(),
        }
    }
}
