//! Fixture loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::args::FixtureArg;
use crate::encoding::OutputEncoding;
use crate::error::HarnessError;

/// A single template case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Behavior being exercised (e.g. `engine/scan`, `wrappers/endian`).
    pub section: String,
    /// Template text. Placeholders are `{}`.
    pub template: String,
    /// Arguments in placeholder order.
    #[serde(default)]
    pub args: Vec<FixtureArg>,
    /// Destination buffer length.
    pub buffer_len: usize,
    /// Expected rendering: the encoded output on success, `error:<kind>` on failure.
    pub expected_output: String,
    /// Expected return value on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_len: Option<usize>,
    #[serde(default)]
    pub encoding: OutputEncoding,
    /// Failure policy to run under: `leave`, `scrub`, or `both`.
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_mode() -> String {
    String::from("both")
}

/// A collection of cases for one family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Family name.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path).map_err(|source| HarnessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| HarnessError::Fixture {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Sorted list of `*.json` files directly under `dir`.
pub fn fixture_paths(dir: &Path) -> Result<Vec<PathBuf>, HarnessError> {
    let entries = std::fs::read_dir(dir).map_err(|source| HarnessError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();
    if paths.is_empty() {
        return Err(HarnessError::NoFixtures(dir.to_path_buf()));
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let set = FixtureSet::from_json(
            r#"{
                "version":"v1",
                "family":"engine",
                "captured_at":"2026-10-01T00:00:00Z",
                "cases":[
                    {"name":"plain","section":"engine/literal","template":"abc","buffer_len":3,"expected_output":"abc"}
                ]
            }"#,
        )
        .expect("valid fixture json");
        let case = &set.cases[0];
        assert!(case.args.is_empty());
        assert_eq!(case.mode, "both");
        assert_eq!(case.encoding, OutputEncoding::Text);
        assert_eq!(case.expected_len, None);
    }

    #[test]
    fn serializes_back() {
        let set = FixtureSet {
            version: "v1".into(),
            family: "wrappers".into(),
            captured_at: "2026-10-01T00:00:00Z".into(),
            cases: vec![FixtureCase {
                name: "be".into(),
                section: "wrappers/endian".into(),
                template: "{}".into(),
                args: vec![FixtureArg::BeU16(0x0102)],
                buffer_len: 2,
                expected_output: "0102".into(),
                expected_len: Some(2),
                encoding: OutputEncoding::Hex,
                mode: "leave".into(),
            }],
        };
        let json = set.to_json().unwrap();
        let back = FixtureSet::from_json(&json).unwrap();
        assert_eq!(back.cases[0].args, set.cases[0].args);
        assert!(json.contains(r#""encoding": "hex""#));
    }

    #[test]
    fn missing_directory_is_io_error() {
        let err = fixture_paths(Path::new("/nonexistent/bumpfmt-fixtures")).unwrap_err();
        assert!(matches!(err, HarnessError::Io { .. }));
    }
}
