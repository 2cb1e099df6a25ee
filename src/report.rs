//! Result records and console reporting for a probe run.
//!
//! The console lines are the program's product, not diagnostics, so they go
//! through `println!` rather than `tracing`.

const RULE_WIDTH: usize = 60;

/// Outcome of a single check. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub details: String,
}

impl TestResult {
    pub fn pass(name: &str, details: String) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            details,
        }
    }

    pub fn fail(name: &str, details: String) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            details,
        }
    }
}

/// Aggregate counters for a full run, folded from the ordered result list.
///
/// Invariant: `tests_passed <= tests_run`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub tests_run: usize,
    pub tests_passed: usize,
}

impl RunSummary {
    pub fn record(&mut self, result: &TestResult) {
        self.tests_run += 1;
        if result.passed {
            self.tests_passed += 1;
        }
    }

    pub fn all_passed(&self) -> bool {
        self.tests_passed == self.tests_run
    }

    /// Process exit code for this summary: 0 when every check passed.
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.all_passed())
    }
}

impl<'a> FromIterator<&'a TestResult> for RunSummary {
    fn from_iter<I: IntoIterator<Item = &'a TestResult>>(results: I) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary.record(result);
        }
        summary
    }
}

pub fn print_banner(base_url: &str) {
    println!("🚀 Starting status-check API probe");
    println!("📍 Probing URL: {base_url}");
    println!("{}", "=".repeat(RULE_WIDTH));
}

pub fn print_outcome(result: &TestResult) {
    if result.passed {
        println!("✅ {}: PASSED {}", result.name, result.details);
    } else {
        println!("❌ {}: FAILED {}", result.name, result.details);
    }
}

pub fn print_summary(summary: &RunSummary) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!(
        "📊 Probe summary: {}/{} checks passed",
        summary.tests_passed, summary.tests_run
    );
    if summary.all_passed() {
        println!("🎉 All checks passed!");
    } else {
        println!("⚠️  Some checks failed!");
    }
}
