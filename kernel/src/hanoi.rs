//! Recursive Tower of Hanoi move-sequence solver.
//!
//! Relocates a stack of `n` disks from a source peg to a destination peg
//! using one auxiliary peg, by the classic decomposition:
//!
//! ```text
//! solve(n, src, aux, dst):
//!   solve(n-1, src, dst, aux)     -- clear the n-1 smaller disks onto aux
//!   emit src -> dst               -- move the largest disk
//!   solve(n-1, aux, src, dst)     -- restack the n-1 disks onto dst
//! ```
//!
//! The decomposition guarantees by construction that only a topmost disk is
//! moved and that no disk ever rests on a smaller one; neither rule is
//! separately checked. Exactly `2^n - 1` moves are emitted, in O(2^n) time
//! and O(n) recursion depth.
//!
//! Peg labels and disk count are validated before the first move is
//! emitted; see [`crate::error::HanoiError`].

use std::fmt;

use crate::error::HanoiError;

/// Hard cap on the disk count: the largest `n` whose `2^n - 1` move total
/// fits in `u64`. Doubles as the solver budget — `2^63` moves could never
/// be enumerated anyway.
pub const MAX_DISKS: u32 = 63;

/// A labeled peg. Three distinct pegs make up a puzzle instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Peg(char);

impl Peg {
    /// Construct a peg from its label (e.g. `'A'`).
    #[must_use]
    pub const fn new(label: char) -> Self {
        Self(label)
    }

    /// The peg's label character.
    #[must_use]
    pub const fn label(self) -> char {
        self.0
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single relocation of the topmost disk of `from` onto `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Peg,
    pub to: Peg,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Sink for moves, delivered in exact solve order.
///
/// Implemented for `Vec<Move>`; callers that want streaming consumption
/// (counting, printing, invariant checking) implement it themselves and
/// pass the sink to [`solve_into`].
pub trait MoveSink {
    /// Record the next move of the solution.
    fn record(&mut self, mv: Move);
}

impl MoveSink for Vec<Move> {
    fn record(&mut self, mv: Move) {
        self.push(mv);
    }
}

/// The closed-form solution length: `2^disks - 1` (0 moves for 0 disks).
///
/// # Panics
///
/// Panics if `disks` exceeds [`MAX_DISKS`] (the count would overflow `u64`).
#[must_use]
pub fn move_count(disks: u32) -> u64 {
    assert!(disks <= MAX_DISKS, "disk count {disks} exceeds MAX_DISKS");
    (1_u64 << disks) - 1
}

/// Solve Tower of Hanoi for `disks` disks, returning the materialized move
/// sequence that relocates the stack from `source` to `destination`.
///
/// ```
/// use primer_kernel::hanoi::{solve, Peg};
///
/// let moves = solve(2, Peg::new('A'), Peg::new('B'), Peg::new('C')).unwrap();
/// let rendered: Vec<String> = moves.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered, ["A -> B", "A -> C", "B -> C"]);
/// ```
///
/// # Errors
///
/// Returns [`HanoiError::InvalidDiskCount`] if `disks > MAX_DISKS`, and
/// [`HanoiError::InvalidPegConfiguration`] if the peg labels are not
/// pairwise distinct. Validation happens before any move is produced.
pub fn solve(
    disks: u32,
    source: Peg,
    auxiliary: Peg,
    destination: Peg,
) -> Result<Vec<Move>, HanoiError> {
    let mut moves = Vec::new();
    solve_into(disks, source, auxiliary, destination, &mut moves)?;
    Ok(moves)
}

/// Streaming variant of [`solve`]: emits each move into `sink` instead of
/// materializing the sequence. Emission order is identical.
///
/// # Errors
///
/// Same pre-flight validation as [`solve`]; on error the sink has not
/// received any move.
pub fn solve_into(
    disks: u32,
    source: Peg,
    auxiliary: Peg,
    destination: Peg,
    sink: &mut dyn MoveSink,
) -> Result<(), HanoiError> {
    validate(disks, source, auxiliary, destination)?;
    recurse(disks, source, auxiliary, destination, sink);
    Ok(())
}

fn validate(disks: u32, source: Peg, auxiliary: Peg, destination: Peg) -> Result<(), HanoiError> {
    if disks > MAX_DISKS {
        return Err(HanoiError::InvalidDiskCount {
            disks,
            max: MAX_DISKS,
        });
    }
    if source == auxiliary || source == destination || auxiliary == destination {
        return Err(HanoiError::InvalidPegConfiguration {
            detail: format!("peg labels must be pairwise distinct, got {source}, {auxiliary}, {destination}"),
        });
    }
    Ok(())
}

fn recurse(disks: u32, source: Peg, auxiliary: Peg, destination: Peg, sink: &mut dyn MoveSink) {
    if disks == 0 {
        return;
    }
    recurse(disks - 1, source, destination, auxiliary, sink);
    sink.record(Move {
        from: source,
        to: destination,
    });
    recurse(disks - 1, auxiliary, source, destination, sink);
}
