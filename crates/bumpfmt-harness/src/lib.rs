//! Fixture-driven conformance harness for bumpfmt.
//!
//! This crate provides:
//! - Fixture sets: JSON descriptions of templates, typed arguments, buffer
//!   sizes, and expected output
//! - A runner that executes each case under the `leave` and `scrub` failure
//!   policies and verifies output, return values, and buffer state
//! - Structured JSONL logging of every case result
//! - Report generation: markdown + JSON conformance reports

#![forbid(unsafe_code)]

pub mod args;
pub mod diff;
pub mod encoding;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use args::FixtureArg;
pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
