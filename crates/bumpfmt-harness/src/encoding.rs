//! Rendering of written bytes for comparison against fixture expectations.

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// How a case's output bytes are rendered into the comparison string.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputEncoding {
    /// UTF-8 text; invalid sequences are replaced.
    #[default]
    Text,
    /// Lowercase hex, two digits per byte, no separators.
    Hex,
}

impl OutputEncoding {
    /// Parse from string (case-insensitive). Returns `None` for unknown names.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "utf8" => Some(Self::Text),
            "hex" => Some(Self::Hex),
            _ => None,
        }
    }

    /// Render `bytes` in this encoding.
    #[must_use]
    pub fn render(self, bytes: &[u8]) -> String {
        match self {
            Self::Text => String::from_utf8_lossy(bytes).into_owned(),
            Self::Hex => encode_hex(bytes),
        }
    }
}

/// Lowercase hex encoding.
#[must_use]
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string. Accepts either case and ignores `_` and whitespace.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, HarnessError> {
    let digits: Vec<u8> = s
        .bytes()
        .filter(|b| *b != b'_' && !b.is_ascii_whitespace())
        .collect();
    hex::decode(digits).map_err(|source| HarnessError::Hex {
        input: s.to_string(),
        source,
    })
}
