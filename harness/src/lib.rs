//! Primer Harness: demonstration orchestration for the algorithm kernels.
//!
//! The harness runs fixed scenarios through the kernel's entry points and
//! packages the outcomes as a content-addressed canonical-JSON report that
//! can be written to and verified from disk.
//!
//! The harness does NOT implement algorithm logic — it delegates to
//! `primer-kernel`. Scenarios provide inputs only; the harness owns
//! orchestration, canonicalization, and digesting.
//!
//! # Pipeline
//!
//! ```text
//! builtin_scenarios() → run_scenarios()
//!   → DemoReportV1 → canonical_json_bytes() → canonical_hash()
//!   → write_report_dir() / read_report_dir() (fail-closed)
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bundle_dir;
pub mod canon;
pub mod digest;
pub mod report;
pub mod runner;
pub mod scenario;
