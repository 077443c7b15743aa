//! Report directory persistence: write/read/verify a `DemoReportV1` on disk.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   report.json         — canonical JSON bytes of the report
//!   report_digest.txt   — ASCII digest string (e.g. "sha256:...")
//! ```
//!
//! The directory path is never part of any hash surface.
//!
//! # Fail-closed semantics
//!
//! - Missing file → error
//! - Stored digest doesn't match the recomputed digest → error
//! - Non-canonical or structurally invalid report bytes → error

use std::fs;
use std::path::Path;

use crate::canon::canonical_json_bytes;
use crate::digest::{canonical_hash, ContentHash, DOMAIN_DEMO_REPORT};
use crate::report::{report_digest, DemoReportV1};

/// Report artifact filename.
pub const REPORT_FILENAME: &str = "report.json";

/// Digest filename.
pub const DIGEST_FILENAME: &str = "report_digest.txt";

/// Error writing a report directory.
#[derive(Debug)]
pub enum ReportDirWriteError {
    /// I/O error during write.
    Io { detail: String },
    /// Canonical JSON serialization failed.
    Canon { detail: String },
}

impl std::fmt::Display for ReportDirWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::Canon { detail } => write!(f, "canonical JSON error: {detail}"),
        }
    }
}

impl std::error::Error for ReportDirWriteError {}

/// Error reading a report directory.
#[derive(Debug)]
pub enum ReportDirReadError {
    /// I/O error during read.
    Io { detail: String },
    /// A required file is missing.
    MissingFile { filename: &'static str },
    /// `report_digest.txt` is not an `algorithm:hex` digest string.
    MalformedDigest { detail: String },
    /// Stored digest doesn't match the recomputed digest of `report.json`.
    DigestMismatch { stored: String, recomputed: String },
    /// `report.json` is not valid JSON, is not in canonical form, or does
    /// not parse as a report.
    ReportInvalid { detail: String },
}

impl std::fmt::Display for ReportDirReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::MissingFile { filename } => write!(f, "missing file: {filename}"),
            Self::MalformedDigest { detail } => write!(f, "malformed digest: {detail}"),
            Self::DigestMismatch { stored, recomputed } => {
                write!(
                    f,
                    "digest mismatch: stored {stored}, recomputed {recomputed}"
                )
            }
            Self::ReportInvalid { detail } => write!(f, "invalid report: {detail}"),
        }
    }
}

impl std::error::Error for ReportDirReadError {}

/// Write a report directory, creating `dir` if needed.
///
/// Returns the report's content digest (also stored in the directory).
///
/// # Errors
///
/// Returns [`ReportDirWriteError`] on canonicalization or I/O failure.
pub fn write_report_dir(
    dir: &Path,
    report: &DemoReportV1,
) -> Result<ContentHash, ReportDirWriteError> {
    let (bytes, digest) = report_digest(report).map_err(|e| ReportDirWriteError::Canon {
        detail: e.to_string(),
    })?;

    fs::create_dir_all(dir).map_err(io_write_error)?;
    fs::write(dir.join(REPORT_FILENAME), &bytes).map_err(io_write_error)?;
    fs::write(dir.join(DIGEST_FILENAME), digest.as_str()).map_err(io_write_error)?;

    Ok(digest)
}

/// Read and verify a report directory.
///
/// Verification is fail-closed: the stored digest must match the digest
/// recomputed from the report bytes, the bytes must already be canonical,
/// and the report must parse structurally.
///
/// # Errors
///
/// Returns [`ReportDirReadError`] describing the first failure encountered.
pub fn read_report_dir(dir: &Path) -> Result<(DemoReportV1, ContentHash), ReportDirReadError> {
    let bytes = read_file(dir, REPORT_FILENAME)?;
    let digest_text = read_file(dir, DIGEST_FILENAME)?;
    let digest_text = String::from_utf8(digest_text).map_err(|e| {
        ReportDirReadError::MalformedDigest {
            detail: format!("digest file is not UTF-8: {e}"),
        }
    })?;

    let stored = ContentHash::parse(digest_text.trim()).ok_or_else(|| {
        ReportDirReadError::MalformedDigest {
            detail: format!("not an algorithm:hex digest: {:?}", digest_text.trim()),
        }
    })?;

    let recomputed = canonical_hash(DOMAIN_DEMO_REPORT, &bytes);
    if stored != recomputed {
        return Err(ReportDirReadError::DigestMismatch {
            stored: stored.as_str().to_string(),
            recomputed: recomputed.as_str().to_string(),
        });
    }

    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|e| ReportDirReadError::ReportInvalid {
            detail: format!("not valid JSON: {e}"),
        })?;

    // Canonical form is part of the contract, not just the digest input.
    let recanonicalized =
        canonical_json_bytes(&value).map_err(|e| ReportDirReadError::ReportInvalid {
            detail: format!("cannot canonicalize: {e}"),
        })?;
    if recanonicalized != bytes {
        return Err(ReportDirReadError::ReportInvalid {
            detail: "report bytes are not in canonical form".into(),
        });
    }

    let report =
        DemoReportV1::from_value(&value).map_err(|e| ReportDirReadError::ReportInvalid {
            detail: e.to_string(),
        })?;

    Ok((report, stored))
}

fn read_file(dir: &Path, filename: &'static str) -> Result<Vec<u8>, ReportDirReadError> {
    let path = dir.join(filename);
    if !path.is_file() {
        return Err(ReportDirReadError::MissingFile { filename });
    }
    fs::read(&path).map_err(|e| ReportDirReadError::Io {
        detail: e.to_string(),
    })
}

fn io_write_error(e: std::io::Error) -> ReportDirWriteError {
    ReportDirWriteError::Io {
        detail: e.to_string(),
    }
}
