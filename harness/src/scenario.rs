//! Fixed demonstration scenarios.
//!
//! The classic driver invocations — searching `[1, 3, 5, 7, 9]` and solving
//! three-disk Hanoi over pegs A/B/C — live here as data instead of scripts.
//! `builtin_scenarios()` is the single source of truth shared by the runner,
//! the lock tests, and the `report_fixture` binary; any change here changes
//! all of them, preventing silent drift.

use primer_kernel::hanoi::Peg;

/// A named binary-search demonstration: sorted haystack, target, and the
/// expected outcome the runner cross-checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchScenarioV1 {
    /// Stable scenario name (appears in the report).
    pub name: String,
    /// The sorted haystack.
    pub haystack: Vec<i64>,
    /// The sought value.
    pub target: i64,
    /// Expected result: `Some(index)` or `None` for absent.
    pub expect: Option<usize>,
}

/// A named Tower of Hanoi demonstration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HanoiScenarioV1 {
    /// Stable scenario name (appears in the report).
    pub name: String,
    /// Number of disks to relocate.
    pub disks: u32,
    pub source: Peg,
    pub auxiliary: Peg,
    pub destination: Peg,
}

/// An ordered demonstration plan: searches first, then towers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoPlanV1 {
    pub searches: Vec<SearchScenarioV1>,
    pub towers: Vec<HanoiScenarioV1>,
}

/// The built-in demonstration plan: the classic textbook scenarios.
#[must_use]
pub fn builtin_scenarios() -> DemoPlanV1 {
    let classic = vec![1, 3, 5, 7, 9];
    DemoPlanV1 {
        searches: vec![
            SearchScenarioV1 {
                name: "classic_hit".into(),
                haystack: classic.clone(),
                target: 5,
                expect: Some(2),
            },
            SearchScenarioV1 {
                name: "classic_miss".into(),
                haystack: classic,
                target: 4,
                expect: None,
            },
            SearchScenarioV1 {
                name: "empty_haystack".into(),
                haystack: Vec::new(),
                target: 5,
                expect: None,
            },
        ],
        towers: vec![
            HanoiScenarioV1 {
                name: "single_disk".into(),
                disks: 1,
                source: Peg::new('A'),
                auxiliary: Peg::new('B'),
                destination: Peg::new('C'),
            },
            HanoiScenarioV1 {
                name: "two_disks".into(),
                disks: 2,
                source: Peg::new('A'),
                auxiliary: Peg::new('B'),
                destination: Peg::new('C'),
            },
            HanoiScenarioV1 {
                name: "classic_three_disks".into(),
                disks: 3,
                source: Peg::new('A'),
                auxiliary: Peg::new('B'),
                destination: Peg::new('C'),
            },
        ],
    }
}
