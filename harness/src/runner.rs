//! Demonstration runner: executes a plan through kernel APIs only.
//!
//! The runner does not implement search or solving itself — it calls
//! `primer_kernel` and cross-checks the kernel's published invariants on
//! the way out:
//!
//! - each search outcome matches the scenario's declared expectation
//! - each move total equals the closed form `2^n - 1`
//! - every move changes pegs and stays on the scenario's three pegs
//!
//! Invariant breakage is a typed [`RunError`], not a panic.

use primer_kernel::error::HanoiError;
use primer_kernel::hanoi::{move_count, solve, Move};
use primer_kernel::search::search;

use crate::digest::{canonical_hash, DOMAIN_MOVE_LOG};
use crate::report::{DemoReportV1, ScenarioOutcomeV1, REPORT_SCHEMA_VERSION};
use crate::scenario::{DemoPlanV1, HanoiScenarioV1};

/// Error during a demonstration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The solver rejected a scenario's inputs.
    Solver { scenario: String, source: HanoiError },
    /// A search outcome differed from the scenario's expectation.
    SearchExpectationFailed {
        scenario: String,
        expected: Option<usize>,
        actual: Option<usize>,
    },
    /// A move total differed from the closed form.
    MoveCountMismatch {
        scenario: String,
        expected: u64,
        actual: u64,
    },
    /// A move left the scenario's pegs or did not change pegs.
    MoveEndpointViolation {
        scenario: String,
        index: usize,
        detail: String,
    },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solver { scenario, source } => {
                write!(f, "scenario {scenario}: {source}")
            }
            Self::SearchExpectationFailed {
                scenario,
                expected,
                actual,
            } => write!(
                f,
                "scenario {scenario}: expected {expected:?}, searched to {actual:?}"
            ),
            Self::MoveCountMismatch {
                scenario,
                expected,
                actual,
            } => write!(
                f,
                "scenario {scenario}: expected {expected} moves, solver emitted {actual}"
            ),
            Self::MoveEndpointViolation {
                scenario,
                index,
                detail,
            } => write!(f, "scenario {scenario}: move {index}: {detail}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Solver { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Execute every scenario in the plan, in order, and package the outcomes.
///
/// # Errors
///
/// Returns [`RunError`] if the solver rejects a scenario or any
/// cross-checked invariant fails. No partial report is produced.
pub fn run_scenarios(plan: &DemoPlanV1) -> Result<DemoReportV1, RunError> {
    let mut outcomes = Vec::with_capacity(plan.searches.len() + plan.towers.len());

    for scenario in &plan.searches {
        let actual = search(&scenario.haystack, &scenario.target);
        if actual != scenario.expect {
            return Err(RunError::SearchExpectationFailed {
                scenario: scenario.name.clone(),
                expected: scenario.expect,
                actual,
            });
        }
        outcomes.push(ScenarioOutcomeV1::Search {
            name: scenario.name.clone(),
            target: scenario.target,
            found: actual.map(|index| index as u64),
        });
    }

    for scenario in &plan.towers {
        outcomes.push(run_tower(scenario)?);
    }

    Ok(DemoReportV1 {
        schema_version: REPORT_SCHEMA_VERSION.into(),
        outcomes,
    })
}

fn run_tower(scenario: &HanoiScenarioV1) -> Result<ScenarioOutcomeV1, RunError> {
    let moves = solve(
        scenario.disks,
        scenario.source,
        scenario.auxiliary,
        scenario.destination,
    )
    .map_err(|source| RunError::Solver {
        scenario: scenario.name.clone(),
        source,
    })?;

    let expected = move_count(scenario.disks);
    let actual = moves.len() as u64;
    if actual != expected {
        return Err(RunError::MoveCountMismatch {
            scenario: scenario.name.clone(),
            expected,
            actual,
        });
    }

    for (index, mv) in moves.iter().enumerate() {
        check_endpoints(scenario, index, mv)?;
    }

    let rendered: Vec<String> = moves.iter().map(ToString::to_string).collect();
    let move_log_digest = canonical_hash(DOMAIN_MOVE_LOG, rendered.join("\n").as_bytes());

    Ok(ScenarioOutcomeV1::Hanoi {
        name: scenario.name.clone(),
        disks: scenario.disks,
        move_total: actual,
        moves: rendered,
        move_log_digest,
    })
}

fn check_endpoints(
    scenario: &HanoiScenarioV1,
    index: usize,
    mv: &Move,
) -> Result<(), RunError> {
    if mv.from == mv.to {
        return Err(RunError::MoveEndpointViolation {
            scenario: scenario.name.clone(),
            index,
            detail: format!("move {mv} does not change pegs"),
        });
    }
    let pegs = [scenario.source, scenario.auxiliary, scenario.destination];
    if !pegs.contains(&mv.from) || !pegs.contains(&mv.to) {
        return Err(RunError::MoveEndpointViolation {
            scenario: scenario.name.clone(),
            index,
            detail: format!("move {mv} uses a peg outside the scenario"),
        });
    }
    Ok(())
}
