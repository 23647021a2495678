use std::path::{Path, PathBuf};

use bumpfmt_harness::fixtures::fixture_paths;
use bumpfmt_harness::structured_log::{LogEmitter, validate_log_file};
use bumpfmt_harness::{ConformanceReport, FixtureSet, TestRunner, VerificationSummary};

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

fn load_all() -> Vec<FixtureSet> {
    fixture_paths(&fixture_dir())
        .expect("bundled fixtures present")
        .iter()
        .map(|p| FixtureSet::from_file(p).expect("fixture parses"))
        .collect()
}

#[test]
fn bundled_fixtures_pass_under_both_policies() {
    let sets = load_all();
    assert!(sets.len() >= 2);

    let mut results = Vec::new();
    for mode in ["leave", "scrub"] {
        let runner = TestRunner::new("bundled", mode);
        for set in &sets {
            results.extend(runner.run(set));
        }
    }
    let summary = VerificationSummary::from_results(results);
    let failures: Vec<_> = summary
        .failures()
        .map(|r| format!("[{}] {}: {:?}", r.mode, r.case_name, r.diff))
        .collect();
    assert!(summary.all_passed(), "failures:\n{}", failures.join("\n"));
    assert!(summary.total > 40);
}

#[test]
fn logged_run_produces_valid_jsonl() {
    let sets = load_all();
    let log_path = std::env::temp_dir().join(format!(
        "bumpfmt-harness-{}-verify.jsonl",
        std::process::id()
    ));

    let mut emitter = LogEmitter::to_file(&log_path, "fixture-verify", "t1").unwrap();
    let mut count = 0;
    for mode in ["leave", "scrub"] {
        let runner = TestRunner::new("fixture-verify", mode);
        for set in &sets {
            count += runner.run_logged(set, &mut emitter).unwrap().len();
        }
    }
    emitter.flush().unwrap();
    drop(emitter);

    let (lines, errors) = validate_log_file(&log_path).unwrap();
    std::fs::remove_file(&log_path).ok();
    assert_eq!(lines, count);
    assert!(errors.is_empty(), "{errors:?}");
}

#[test]
fn report_renders_for_bundled_run() {
    let sets = load_all();
    let runner = TestRunner::new("bundled", "leave");
    let results: Vec<_> = sets.iter().flat_map(|s| runner.run(s)).collect();
    let report = ConformanceReport {
        title: "bumpfmt Conformance Report".into(),
        mode: "leave".into(),
        timestamp: bumpfmt_harness::structured_log::now_utc(),
        summary: VerificationSummary::from_results(results),
    };
    let md = report.to_markdown();
    assert!(md.contains("| hello_world | engine/scan | leave | PASS |"));
    assert!(md.contains("| big_endian_u32 | wrappers/endian | leave | PASS |"));
    assert!(!md.contains("## Failures"));
}
