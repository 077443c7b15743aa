//! Golden locks for the algorithm kernels: exact sequences and the rules
//! of the puzzle, verified by simulation.

use lock_tests::canonical_report::THREE_DISK_MOVES;
use primer_kernel::hanoi::{move_count, solve, Move, Peg};
use primer_kernel::search::search;

const A: Peg = Peg::new('A');
const B: Peg = Peg::new('B');
const C: Peg = Peg::new('C');

#[test]
fn three_disk_sequence_is_pinned() {
    let moves = solve(3, A, B, C).unwrap();
    let rendered: Vec<String> = moves.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, THREE_DISK_MOVES);
}

#[test]
fn move_totals_match_the_closed_form() {
    for disks in 0..=16 {
        let moves = solve(disks, A, B, C).unwrap();
        assert_eq!(moves.len() as u64, move_count(disks));
    }
}

#[test]
fn classic_search_scenarios_are_pinned() {
    assert_eq!(search(&[1, 3, 5, 7, 9], &5), Some(2));
    assert_eq!(search(&[1, 3, 5, 7, 9], &4), None);
}

/// Replay a move sequence against actual peg stacks, enforcing the puzzle
/// rules the solver guarantees by construction: only a topmost disk moves,
/// and a disk never rests on a smaller one.
fn replay(disks: u32, moves: &[Move]) {
    let labels = ['A', 'B', 'C'];
    let index_of = |peg: Peg| {
        labels
            .iter()
            .position(|&l| l == peg.label())
            .expect("move uses an unknown peg")
    };

    // Stack bottom-to-top; disk 1 is the smallest.
    let mut stacks: [Vec<u32>; 3] = [(1..=disks).rev().collect(), Vec::new(), Vec::new()];

    for (step, mv) in moves.iter().enumerate() {
        let disk = stacks[index_of(mv.from)]
            .pop()
            .unwrap_or_else(|| panic!("step {step}: move {mv} from an empty peg"));
        if let Some(&resting) = stacks[index_of(mv.to)].last() {
            assert!(
                disk < resting,
                "step {step}: move {mv} places disk {disk} on smaller disk {resting}"
            );
        }
        stacks[index_of(mv.to)].push(disk);
    }

    assert!(stacks[0].is_empty(), "source peg must end empty");
    assert!(stacks[1].is_empty(), "auxiliary peg must end empty");
    assert_eq!(
        stacks[2],
        (1..=disks).rev().collect::<Vec<u32>>(),
        "destination peg must hold the full stack in order"
    );
}

#[test]
fn solutions_obey_the_puzzle_rules_under_replay() {
    for disks in 0..=10 {
        let moves = solve(disks, A, B, C).unwrap();
        replay(disks, &moves);
    }
}
