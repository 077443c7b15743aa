//! Demo report artifact: versioned, canonical, content-addressed.
//!
//! A `DemoReportV1` is the executed outcome of a demonstration plan. It is
//! serialized only through [`crate::canon::canonical_json_bytes`] and
//! digested under [`crate::digest::DOMAIN_DEMO_REPORT`]; the digest is the
//! report's identity. Parsing back from JSON is fail-closed: unknown
//! outcome kinds, schema version drift, and count mismatches are hard
//! errors, never silently patched.

use serde_json::json;

use crate::canon::{canonical_json_bytes, CanonError};
use crate::digest::{canonical_hash, ContentHash, DOMAIN_DEMO_REPORT};

/// Schema version written into every report.
pub const REPORT_SCHEMA_VERSION: &str = "1.0";

/// The executed result of one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioOutcomeV1 {
    /// A binary-search demonstration: target found at `index`, or absent.
    Search {
        name: String,
        target: i64,
        found: Option<u64>,
    },
    /// A Tower of Hanoi demonstration: the rendered move log plus its
    /// content digest (the digest stands in for the log when sequences
    /// are compared out-of-band).
    Hanoi {
        name: String,
        disks: u32,
        move_total: u64,
        moves: Vec<String>,
        move_log_digest: ContentHash,
    },
}

/// A versioned demonstration report: ordered scenario outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReportV1 {
    pub schema_version: String,
    pub outcomes: Vec<ScenarioOutcomeV1>,
}

impl DemoReportV1 {
    /// Build the JSON value for this report.
    ///
    /// `scenario_count` is written redundantly and cross-checked on parse.
    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        let outcomes: Vec<serde_json::Value> = self.outcomes.iter().map(outcome_to_value).collect();
        json!({
            "schema_version": self.schema_version,
            "scenario_count": self.outcomes.len(),
            "outcomes": outcomes,
        })
    }

    /// Reconstruct a report from its JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ReportParseError`] on any structural problem: missing or
    /// mistyped fields, an unrecognized schema version or outcome kind, or
    /// a `scenario_count` that disagrees with the outcome list.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, ReportParseError> {
        let schema_version = get_str(value, "schema_version")?;
        if schema_version != REPORT_SCHEMA_VERSION {
            return Err(ReportParseError::VersionMismatch {
                found: schema_version,
            });
        }

        let declared = get_u64(value, "scenario_count")?;
        let outcome_values = value
            .get("outcomes")
            .and_then(serde_json::Value::as_array)
            .ok_or(ReportParseError::MissingField { field: "outcomes" })?;
        if declared != outcome_values.len() as u64 {
            return Err(ReportParseError::CountMismatch {
                declared,
                actual: outcome_values.len() as u64,
            });
        }

        let outcomes = outcome_values
            .iter()
            .map(outcome_from_value)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            schema_version,
            outcomes,
        })
    }
}

/// Canonical bytes and content digest of a report.
///
/// # Errors
///
/// Returns [`CanonError`] if the report value cannot be canonicalized
/// (cannot happen for values built by [`DemoReportV1::to_value`], which
/// emits integers only).
pub fn report_digest(report: &DemoReportV1) -> Result<(Vec<u8>, ContentHash), CanonError> {
    let bytes = canonical_json_bytes(&report.to_value())?;
    let digest = canonical_hash(DOMAIN_DEMO_REPORT, &bytes);
    Ok((bytes, digest))
}

fn outcome_to_value(outcome: &ScenarioOutcomeV1) -> serde_json::Value {
    match outcome {
        ScenarioOutcomeV1::Search {
            name,
            target,
            found,
        } => match found {
            Some(index) => json!({
                "kind": "search",
                "name": name,
                "target": target,
                "outcome": "found",
                "index": index,
            }),
            None => json!({
                "kind": "search",
                "name": name,
                "target": target,
                "outcome": "absent",
            }),
        },
        ScenarioOutcomeV1::Hanoi {
            name,
            disks,
            move_total,
            moves,
            move_log_digest,
        } => json!({
            "kind": "hanoi",
            "name": name,
            "disks": disks,
            "move_total": move_total,
            "moves": moves,
            "move_log_digest": move_log_digest.as_str(),
        }),
    }
}

fn outcome_from_value(value: &serde_json::Value) -> Result<ScenarioOutcomeV1, ReportParseError> {
    let kind = get_str(value, "kind")?;
    match kind.as_str() {
        "search" => {
            let name = get_str(value, "name")?;
            let target = get_i64(value, "target")?;
            let found = match get_str(value, "outcome")?.as_str() {
                "found" => Some(get_u64(value, "index")?),
                "absent" => None,
                other => {
                    return Err(ReportParseError::InvalidField {
                        field: "outcome",
                        detail: format!("unrecognized search outcome {other:?}"),
                    })
                }
            };
            Ok(ScenarioOutcomeV1::Search {
                name,
                target,
                found,
            })
        }
        "hanoi" => {
            let name = get_str(value, "name")?;
            let disks = u32::try_from(get_u64(value, "disks")?).map_err(|_| {
                ReportParseError::InvalidField {
                    field: "disks",
                    detail: "disk count out of range".into(),
                }
            })?;
            let move_total = get_u64(value, "move_total")?;
            let moves = value
                .get("moves")
                .and_then(serde_json::Value::as_array)
                .ok_or(ReportParseError::MissingField { field: "moves" })?
                .iter()
                .map(|m| {
                    m.as_str().map(str::to_string).ok_or_else(|| {
                        ReportParseError::InvalidField {
                            field: "moves",
                            detail: "move entries must be strings".into(),
                        }
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            let digest_str = get_str(value, "move_log_digest")?;
            let move_log_digest = ContentHash::parse(&digest_str).ok_or_else(|| {
                ReportParseError::InvalidField {
                    field: "move_log_digest",
                    detail: format!("not an algorithm:hex digest: {digest_str:?}"),
                }
            })?;
            Ok(ScenarioOutcomeV1::Hanoi {
                name,
                disks,
                move_total,
                moves,
                move_log_digest,
            })
        }
        other => Err(ReportParseError::UnknownKind {
            kind: other.to_string(),
        }),
    }
}

fn get_str(value: &serde_json::Value, field: &'static str) -> Result<String, ReportParseError> {
    value
        .get(field)
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
        .ok_or(ReportParseError::MissingField { field })
}

fn get_u64(value: &serde_json::Value, field: &'static str) -> Result<u64, ReportParseError> {
    value
        .get(field)
        .and_then(serde_json::Value::as_u64)
        .ok_or(ReportParseError::MissingField { field })
}

fn get_i64(value: &serde_json::Value, field: &'static str) -> Result<i64, ReportParseError> {
    value
        .get(field)
        .and_then(serde_json::Value::as_i64)
        .ok_or(ReportParseError::MissingField { field })
}

/// Structural failure while reconstructing a report from JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportParseError {
    /// A required field is missing or has the wrong type.
    MissingField { field: &'static str },
    /// A field is present but its value is invalid.
    InvalidField { field: &'static str, detail: String },
    /// `schema_version` is not recognized.
    VersionMismatch { found: String },
    /// An outcome entry has an unrecognized `kind`.
    UnknownKind { kind: String },
    /// `scenario_count` disagrees with the outcome list length.
    CountMismatch { declared: u64, actual: u64 },
}

impl std::fmt::Display for ReportParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { field } => {
                write!(f, "missing or mistyped report field: {field}")
            }
            Self::InvalidField { field, detail } => {
                write!(f, "invalid report field {field}: {detail}")
            }
            Self::VersionMismatch { found } => {
                write!(f, "unrecognized report schema version: {found}")
            }
            Self::UnknownKind { kind } => {
                write!(f, "unrecognized outcome kind: {kind}")
            }
            Self::CountMismatch { declared, actual } => {
                write!(
                    f,
                    "scenario_count mismatch: declared {declared}, found {actual} outcomes"
                )
            }
        }
    }
}

impl std::error::Error for ReportParseError {}
