//! Single source of truth for the canonical demonstration report.
//!
//! Used by both the `report_fixture` binary and the golden-lock
//! integration tests. Any change here changes both, preventing silent
//! drift between what the fixture binary writes and what the in-process
//! tests expect.

use primer_harness::report::DemoReportV1;
use primer_harness::runner::run_scenarios;
use primer_harness::scenario::builtin_scenarios;

/// The exact seven-move solution for three disks over pegs A/B/C.
///
/// This is the oracle anchor for the solver locks. Do not change without
/// updating every downstream fixture.
pub const THREE_DISK_MOVES: [&str; 7] = [
    "A -> C", "A -> B", "C -> B", "A -> C", "B -> A", "B -> C", "A -> C",
];

/// Build the canonical demonstration report from the built-in plan.
///
/// # Panics
///
/// Panics if the built-in plan fails to run (indicates a kernel or runner
/// bug, not a usage error).
#[must_use]
pub fn canonical_demo_report() -> DemoReportV1 {
    run_scenarios(&builtin_scenarios()).expect("built-in plan must run clean")
}
