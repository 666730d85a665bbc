//! Conformance harness for ip4addr.
//!
//! This crate provides:
//! - Fixture sets: JSON reference cases for the codec and value operations
//! - Fixture execution: run one case against `ip4addr-core` under a parse mode
//! - Capture: snapshot current behavior as a fixture set
//! - Report generation: markdown + JSON conformance reports
//! - Structured JSONL logging for verification runs

#![forbid(unsafe_code)]

pub mod capture;
pub mod diff;
pub mod execute;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use execute::{ExecError, execute_fixture_case};
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
