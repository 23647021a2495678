//! CLI entrypoint for the bumpfmt conformance harness.

use std::path::PathBuf;

use bumpfmt_core::{FailurePolicy, Format, upper_bound, write_with_policy};
use bumpfmt_harness::encoding::OutputEncoding;
use bumpfmt_harness::structured_log::{self, LogEmitter, LogLevel};
use bumpfmt_harness::{ConformanceReport, FixtureArg, FixtureSet, TestRunner, VerificationSummary};
use clap::{Parser, Subcommand};

/// Conformance tooling for bumpfmt.
#[derive(Debug, Parser)]
#[command(name = "bumpfmt-harness")]
#[command(about = "Fixture-driven conformance harness for bumpfmt")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the engine against fixture files under both failure policies.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown). A JSON report is written alongside.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log output path.
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Validate a structured JSONL log file.
    ValidateLog {
        #[arg(long)]
        path: PathBuf,
    },
    /// Render a single template to stdout.
    Render {
        /// Template text with `{}` placeholders.
        #[arg(long)]
        template: String,
        /// Argument as `kind:value` (repeatable), e.g. `u32:42`, `be_u16:0x0102`.
        #[arg(long = "arg")]
        args: Vec<String>,
        /// Destination buffer length (defaults to the computed upper bound).
        #[arg(long)]
        buffer_len: Option<usize>,
        /// Output encoding (`text` or `hex`).
        #[arg(long, default_value = "text")]
        encoding: String,
        /// Failure policy (`leave` or `scrub`).
        #[arg(long, env = "BUMPFMT_ON_FAILURE", default_value = "leave")]
        policy: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Verify {
            fixture,
            report,
            log,
        } => {
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let mut fixture_sets = Vec::new();
            for path in bumpfmt_harness::fixtures::fixture_paths(&fixture)? {
                match FixtureSet::from_file(&path) {
                    Ok(set) => fixture_sets.push(set),
                    Err(err) => eprintln!("Skipping {}: {err}", path.display()),
                }
            }
            if fixture_sets.is_empty() {
                return Err(format!("No loadable fixture sets in {}", fixture.display()).into());
            }

            let run_id = std::process::id().to_string();
            let mut emitter = match &log {
                Some(path) => LogEmitter::to_file(path, "fixture-verify", &run_id)?,
                None => LogEmitter::sink(),
            };
            emitter.emit(LogLevel::Info, "verify_start")?;

            let leave_runner = TestRunner::new("fixture-verify", FailurePolicy::Leave.as_str());
            let scrub_runner = TestRunner::new("fixture-verify", FailurePolicy::Scrub.as_str());
            let mut results = Vec::new();
            for set in &fixture_sets {
                results.extend(leave_runner.run_logged(set, &mut emitter)?);
                results.extend(scrub_runner.run_logged(set, &mut emitter)?);
            }

            let summary = VerificationSummary::from_results(results);
            let report_doc = ConformanceReport {
                title: String::from("bumpfmt Conformance Report"),
                mode: String::from("leave+scrub"),
                timestamp: structured_log::now_utc(),
                summary,
            };

            emitter.emit(LogLevel::Info, "verify_end")?;
            emitter.flush()?;

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );
            for failure in report_doc.summary.failures() {
                eprintln!("FAIL [{}] {}", failure.mode, failure.case_name);
                if let Some(diff) = &failure.diff {
                    eprintln!("{diff}");
                }
            }

            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                std::fs::write(report_path.with_extension("json"), report_doc.to_json())?;
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::ValidateLog { path } => {
            let (lines, errors) = structured_log::validate_log_file(&path)?;
            for err in &errors {
                eprintln!("{err}");
            }
            eprintln!(
                "Validated {lines} line(s) in {}: {} error(s)",
                path.display(),
                errors.len()
            );
            if !errors.is_empty() {
                return Err("Log validation failed".into());
            }
        }
        Command::Render {
            template,
            args,
            buffer_len,
            encoding,
            policy,
        } => {
            let encoding = OutputEncoding::from_str_loose(&encoding)
                .ok_or_else(|| format!("Unsupported encoding '{encoding}', expected text|hex"))?;
            let parsed = args
                .iter()
                .map(|raw| raw.parse::<FixtureArg>())
                .collect::<Result<Vec<_>, _>>()?;
            let values = bumpfmt_harness::args::materialize(&parsed)?;
            let refs: Vec<&dyn Format> = values.iter().map(|v| &**v).collect();

            let len = buffer_len.unwrap_or_else(|| upper_bound(template.as_bytes(), &refs));
            let mut buffer = vec![0u8; len];
            let policy = FailurePolicy::from_str_loose(&policy);
            let n = write_with_policy(policy, &mut buffer, template.as_bytes(), &refs)?;
            println!("{}", encoding.render(&buffer[..n]));
            eprintln!("{n} byte(s) written into a {len}-byte buffer");
        }
    }

    Ok(())
}
