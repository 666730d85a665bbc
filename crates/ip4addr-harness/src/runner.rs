//! Test execution engine.

use ip4addr_core::ParseMode;

use crate::diff;
use crate::execute::execute_fixture_case;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::verify::VerificationResult;

/// Runs a fixture set under one parse mode and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    /// Parse mode the cases run under.
    pub mode: ParseMode,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>, mode: ParseMode) -> Self {
        Self {
            campaign: campaign.into(),
            mode,
        }
    }

    /// Run all fixtures in a set that apply to this runner's mode.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        let mode = self.mode.as_str();
        fixture_set
            .cases
            .iter()
            .filter(|case| mode_matches(mode, &case.mode))
            .map(|case| {
                let (actual, diff) = execute_case(case, self.mode);
                let case_name = if case.mode.eq_ignore_ascii_case("both") {
                    format!("{} [{mode}]", case.name)
                } else {
                    case.name.clone()
                };
                VerificationResult {
                    family: fixture_set.family.clone(),
                    function: case.function.clone(),
                    mode: mode.to_string(),
                    case_name,
                    reference: case.reference.clone(),
                    passed: actual == case.expected_output,
                    expected: case.expected_output.clone(),
                    actual,
                    diff,
                }
            })
            .collect()
    }
}

/// Run `sets` under both parse modes, sorted for reproducible reports.
pub fn run_all_modes(campaign: &str, sets: &[FixtureSet]) -> Vec<VerificationResult> {
    let runners = [
        TestRunner::new(campaign, ParseMode::Legacy),
        TestRunner::new(campaign, ParseMode::Strict),
    ];
    let mut results: Vec<VerificationResult> = sets
        .iter()
        .flat_map(|set| runners.iter().flat_map(move |runner| runner.run(set)))
        .collect();
    results.sort_by(|a, b| {
        a.family
            .cmp(&b.family)
            .then_with(|| a.function.cmp(&b.function))
            .then_with(|| a.mode.cmp(&b.mode))
            .then_with(|| a.case_name.cmp(&b.case_name))
    });
    results
}

fn mode_matches(active_mode: &str, case_mode: &str) -> bool {
    case_mode.eq_ignore_ascii_case(active_mode) || case_mode.eq_ignore_ascii_case("both")
}

fn execute_case(case: &FixtureCase, mode: ParseMode) -> (String, Option<String>) {
    let actual = match execute_fixture_case(&case.function, &case.inputs, mode) {
        Ok(out) => out,
        Err(err) => format!("unsupported:{err}"),
    };
    let diff_out =
        (actual != case.expected_output).then(|| diff::render_diff(&case.expected_output, &actual));
    (actual, diff_out)
}
