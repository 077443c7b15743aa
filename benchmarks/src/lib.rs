//! Shared helpers for primer benchmark suites.

use primer_harness::report::DemoReportV1;
use primer_harness::runner::run_scenarios;
use primer_harness::scenario::builtin_scenarios;

/// A sorted haystack of `len` evenly spaced values for search benchmarks.
///
/// Values are `0, 2, 4, ...` so that odd targets exercise the miss path
/// and even targets the hit path.
#[must_use]
pub fn even_haystack(len: usize) -> Vec<i64> {
    (0..len as i64).map(|i| i * 2).collect()
}

/// Build the built-in demonstration report once for report benchmarks.
///
/// # Panics
///
/// Panics if the built-in plan fails to run. Benchmark setup failures are
/// fatal.
#[must_use]
pub fn prepared_report() -> DemoReportV1 {
    run_scenarios(&builtin_scenarios()).expect("built-in plan must run clean")
}
