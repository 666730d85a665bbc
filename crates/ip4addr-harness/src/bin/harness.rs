//! CLI entrypoint for the ip4addr conformance harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ip4addr_core::{Ip4Addr, ParseMode, codec};
use ip4addr_harness::capture::{CODEC_FAMILY, capture_fixture_set, default_vectors};
use ip4addr_harness::fixtures::{FixtureSet, fixture_paths};
use ip4addr_harness::runner::run_all_modes;
use ip4addr_harness::structured_log::{self, LogEmitter, LogEntry, LogLevel};
use ip4addr_harness::{ConformanceReport, VerificationSummary};

/// Conformance tooling for ip4addr.
#[derive(Debug, Parser)]
#[command(name = "ip4addr-harness")]
#[command(about = "Conformance testing harness for ip4addr")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Snapshot current behavior of the built-in vectors as a fixture file.
    Capture {
        /// Output fixture JSON path.
        #[arg(long)]
        output: PathBuf,
        /// Optional fixed timestamp for deterministic output.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Verify the implementation against fixture files.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown; JSON is written alongside).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log output path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Optional fixed timestamp for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Parse one address and print what the library makes of it.
    Inspect {
        /// Address text.
        text: String,
        /// Grammar: `legacy` or `strict`.
        #[arg(long, default_value = "legacy")]
        mode: String,
    },
    /// Validate a structured JSONL log file.
    ValidateLog {
        #[arg(long)]
        log: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Capture { output, timestamp } => {
            eprintln!("Capturing {CODEC_FAMILY} fixtures to {}", output.display());
            let stamp = timestamp.unwrap_or_else(structured_log::now_utc);
            let set = capture_fixture_set(CODEC_FAMILY, &stamp, &default_vectors())?;
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, set.to_json()?)?;
            eprintln!("Captured {} cases", set.cases.len());
        }
        Command::Verify {
            fixture,
            report,
            log,
            timestamp,
        } => {
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let mut fixture_sets = Vec::new();
            for path in fixture_paths(&fixture)? {
                match FixtureSet::from_file(&path) {
                    Ok(set) => fixture_sets.push(set),
                    Err(err) => eprintln!("Skipping {}: {}", path.display(), err),
                }
            }
            if fixture_sets.is_empty() {
                return Err(format!("No fixture JSON files found in {}", fixture.display()).into());
            }

            let started = std::time::Instant::now();
            let results = run_all_modes("fixture-verify", &fixture_sets);
            let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
            let summary = VerificationSummary::from_results(results);

            let report_doc = ConformanceReport {
                title: String::from("ip4addr Conformance Report"),
                mode: String::from("legacy+strict"),
                timestamp: timestamp.unwrap_or_else(structured_log::now_utc),
                summary,
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );
            for r in report_doc.summary.failures() {
                eprintln!("FAIL {}: expected {:?}, got {:?}", r.case_name, r.expected, r.actual);
            }

            let mut artifacts = Vec::new();
            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json())?;
                artifacts.push(report_path.display().to_string());
                artifacts.push(json_path.display().to_string());
            }

            if let Some(log_path) = log {
                let run_id = format!("run-{}", std::process::id());
                let mut emitter = LogEmitter::to_file(&log_path, "fixture-verify", &run_id)?;
                emitter.emit(LogLevel::Info, "verify_start")?;
                for r in &report_doc.summary.results {
                    emitter.emit_result(r)?;
                }
                let level = if report_doc.summary.all_passed() {
                    LogLevel::Info
                } else {
                    LogLevel::Error
                };
                emitter.emit_entry(
                    LogEntry::new("", level, "verify_end")
                        .with_duration_ms(elapsed_ms)
                        .with_artifacts(artifacts)
                        .with_details(serde_json::json!({
                            "total": report_doc.summary.total,
                            "passed": report_doc.summary.passed,
                            "failed": report_doc.summary.failed,
                        })),
                )?;
                emitter.flush()?;
                eprintln!("Wrote structured log to {}", log_path.display());
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::Inspect { text, mode } => {
            let mode = ParseMode::from_str_loose(&mode);
            let addr = codec::aton_with(text.as_bytes(), mode)
                .map_err(|e| format!("{text:?} rejected in {} mode: {e}", mode.as_str()))?;
            println!("{}", serde_json::to_string_pretty(&describe(&addr, mode))?);
        }
        Command::ValidateLog { log } => {
            let (lines, errors) = structured_log::validate_log_file(&log)?;
            for err in &errors {
                eprintln!("{err}");
            }
            eprintln!("Validated {lines} lines, {} errors", errors.len());
            if !errors.is_empty() {
                return Err(format!("{} has schema violations", log.display()).into());
            }
        }
    }

    Ok(())
}

fn describe(addr: &Ip4Addr, mode: ParseMode) -> serde_json::Value {
    serde_json::json!({
        "mode": mode.as_str(),
        "dotted": addr.to_string(),
        "octets": addr.octets(),
        "host_order": format!("{:#010x}", addr.to_host().get()),
        "network_order": format!("{:#010x}", addr.raw()),
        "class": addr.class().as_str(),
        "is_any": addr.is_any(),
        "is_loopback": addr.is_loopback(),
        "is_link_local": addr.is_link_local(),
        "is_multicast": addr.is_multicast(),
        "is_limited_broadcast": addr.is_limited_broadcast(),
    })
}
