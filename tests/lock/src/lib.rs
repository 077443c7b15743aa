//! Cross-crate golden locks for the primer workspace.
//!
//! The tests in `tests/` pin exact artifacts — move sequences, canonical
//! report bytes, content digests — against drift. Shared fixtures live in
//! [`canonical_report`] so the fixture binary and the tests can never
//! silently diverge.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canonical_report;
