//! Tiny binary that builds the canonical demonstration report, writes it
//! as a report directory, and prints deterministic output lines for
//! cross-process verification.
//!
//! Usage: `report_fixture <dir>`
//! Output: three lines, each `key=value`:
//!   `scenario_count`=...
//!   `report_digest`=sha256:...
//!   `read_verdict`=Match

use lock_tests::canonical_report::canonical_demo_report;
use primer_harness::bundle_dir::{read_report_dir, write_report_dir};

fn main() {
    let dir = std::env::args()
        .nth(1)
        .expect("usage: report_fixture <dir>");
    let dir = std::path::PathBuf::from(dir);

    let report = canonical_demo_report();
    let written_digest = write_report_dir(&dir, &report).unwrap();

    // Round-trip through the fail-closed reader.
    let (read_back, read_digest) = read_report_dir(&dir).unwrap();
    assert_eq!(
        report, read_back,
        "round-trip produced a different report — non-determinism detected"
    );
    assert_eq!(written_digest, read_digest);

    println!("scenario_count={}", report.outcomes.len());
    println!("report_digest={}", written_digest.as_str());
    println!("read_verdict=Match");
}
