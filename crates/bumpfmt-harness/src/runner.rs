//! Test execution engine.

use std::time::Instant;

use bumpfmt_core::{FailurePolicy, Format, write_with_policy};

use crate::args::materialize;
use crate::diff::render_diff;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use crate::verify::VerificationResult;

/// Fill byte for fresh destination buffers, so untouched and scrubbed
/// bytes are distinguishable.
pub const SENTINEL: u8 = 0xA5;

/// Runs a fixture set under one failure policy.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    /// Failure policy name (`leave` or `scrub`).
    pub mode: String,
}

/// Observations from executing one case.
#[derive(Debug, Clone)]
pub struct CaseRun {
    pub actual: String,
    pub passed: bool,
    pub diff: Option<String>,
    pub bytes_written: Option<usize>,
    pub error_kind: Option<&'static str>,
    pub latency_ns: u64,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>, mode: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
            mode: mode.into(),
        }
    }

    /// The policy this runner executes under.
    #[must_use]
    pub fn policy(&self) -> FailurePolicy {
        FailurePolicy::from_str_loose(&self.mode)
    }

    /// Run all matching cases and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        self.run_with(fixture_set, |_, _| {})
    }

    /// Run all matching cases, emitting one `case_result` log entry per case.
    pub fn run_logged(
        &self,
        fixture_set: &FixtureSet,
        emitter: &mut LogEmitter,
    ) -> std::io::Result<Vec<VerificationResult>> {
        let mode = self.policy().as_str();
        let mut io_error = None;
        let results = self.run_with(fixture_set, |case, run| {
            if io_error.is_some() {
                return;
            }
            if let Err(err) = emitter.emit_entry(case_entry(mode, case, run)) {
                io_error = Some(err);
            }
        });
        match io_error {
            Some(err) => Err(err),
            None => Ok(results),
        }
    }

    fn run_with(
        &self,
        fixture_set: &FixtureSet,
        mut observe: impl FnMut(&FixtureCase, &CaseRun),
    ) -> Vec<VerificationResult> {
        let policy = self.policy();
        fixture_set
            .cases
            .iter()
            .filter(|case| mode_matches(policy, &case.mode))
            .map(|case| {
                let run = execute_case(case, policy);
                observe(case, &run);
                VerificationResult {
                    case_name: case.name.clone(),
                    section: case.section.clone(),
                    mode: policy.as_str().to_string(),
                    passed: run.passed,
                    expected: case.expected_output.clone(),
                    actual: run.actual,
                    diff: run.diff,
                }
            })
            .collect()
    }
}

fn mode_matches(policy: FailurePolicy, case_mode: &str) -> bool {
    let case = case_mode.trim().to_ascii_lowercase();
    case == "both" || case == policy.as_str()
}

fn case_entry(mode: &str, case: &FixtureCase, run: &CaseRun) -> LogEntry {
    let (level, outcome) = if run.passed {
        (LogLevel::Info, Outcome::Pass)
    } else {
        (LogLevel::Error, Outcome::Fail)
    };
    let mut entry = LogEntry::new(String::new(), level, "case_result")
        .with_mode(mode)
        .with_case(&case.name, case.template.len())
        .with_outcome(outcome)
        .with_latency_ns(run.latency_ns);
    if let Some(n) = run.bytes_written {
        entry = entry.with_bytes_written(n);
    }
    if let Some(kind) = run.error_kind {
        entry = entry.with_error_kind(kind);
    }
    if !run.passed {
        entry = entry.with_details(serde_json::json!({
            "expected": case.expected_output,
            "actual": run.actual,
        }));
    }
    entry
}

/// Execute one case under `policy` against a fresh sentinel-filled buffer.
#[must_use]
pub fn execute_case(case: &FixtureCase, policy: FailurePolicy) -> CaseRun {
    let args = match materialize(&case.args) {
        Ok(args) => args,
        Err(err) => {
            let actual = format!("invalid:{err}");
            return CaseRun {
                diff: Some(render_diff(&case.expected_output, &actual)),
                actual,
                passed: false,
                bytes_written: None,
                error_kind: None,
                latency_ns: 0,
            };
        }
    };
    let refs: Vec<&dyn Format> = args.iter().map(|a| &**a).collect();
    let mut buffer = vec![SENTINEL; case.buffer_len];

    let started = Instant::now();
    let result = write_with_policy(policy, &mut buffer, case.template.as_bytes(), &refs);
    let latency_ns = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);

    let mut notes = Vec::new();
    let (actual, bytes_written, error_kind) = match result {
        Ok(n) => {
            if let Some(expected) = case.expected_len
                && expected != n
            {
                notes.push(format!("expected_len {expected}, engine returned {n}"));
            }
            (case.encoding.render(&buffer[..n]), Some(n), None)
        }
        Err(err) => {
            if policy.scrubs() && buffer.iter().any(|&b| b != 0) {
                notes.push(String::from("scrub policy left non-zero bytes in the buffer"));
            }
            (format!("error:{}", err.kind()), None, Some(err.kind()))
        }
    };

    let diff = if actual != case.expected_output {
        Some(render_diff(&case.expected_output, &actual))
    } else if !notes.is_empty() {
        Some(notes.join("\n"))
    } else {
        None
    };

    CaseRun {
        passed: diff.is_none(),
        actual,
        diff,
        bytes_written,
        error_kind,
        latency_ns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> FixtureSet {
        FixtureSet::from_json(
            r#"{
                "version":"v1",
                "family":"engine",
                "captured_at":"2026-10-01T00:00:00Z",
                "cases":[
                    {"name":"hello","section":"engine/scan","template":"hello {} world","args":[{"kind":"u32","value":123}],"buffer_len":32,"expected_output":"hello 123 world","expected_len":15,"mode":"both"},
                    {"name":"leave_overflow","section":"engine/bounds","template":"abcd{}","args":[{"kind":"u16","value":123}],"buffer_len":6,"expected_output":"error:out_of_bounds","mode":"leave"},
                    {"name":"scrub_overflow","section":"engine/bounds","template":"abcd{}","args":[{"kind":"u16","value":123}],"buffer_len":6,"expected_output":"error:out_of_bounds","mode":"scrub"}
                ]
            }"#,
        )
        .expect("valid fixture json")
    }

    #[test]
    fn leave_runner_executes_matching_cases() {
        let results = TestRunner::new("smoke", "leave").run(&fixture());
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed), "{results:?}");
        assert!(results.iter().all(|r| r.mode == "leave"));
    }

    #[test]
    fn scrub_runner_checks_zeroed_buffer() {
        let results = TestRunner::new("smoke", "scrub").run(&fixture());
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed), "{results:?}");
    }

    #[test]
    fn wrong_expected_len_fails_with_note() {
        let mut set = fixture();
        set.cases[0].expected_len = Some(16);
        let run = execute_case(&set.cases[0], FailurePolicy::Leave);
        assert!(!run.passed);
        assert_eq!(run.actual, "hello 123 world");
        assert!(run.diff.unwrap().contains("expected_len 16"));
    }

    #[test]
    fn failed_write_reports_error_kind() {
        let set = fixture();
        let run = execute_case(&set.cases[1], FailurePolicy::Leave);
        assert_eq!(run.error_kind, Some("out_of_bounds"));
        assert_eq!(run.bytes_written, None);
    }

    #[test]
    fn undecodable_argument_is_reported() {
        let mut set = fixture();
        set.cases[0].args = vec![crate::args::FixtureArg::Bytes("xyz".into())];
        let run = execute_case(&set.cases[0], FailurePolicy::Leave);
        assert!(!run.passed);
        assert!(run.actual.starts_with("invalid:"));
    }
}
