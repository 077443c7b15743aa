//! Primer Kernel: pure classic-algorithm kernels.
//!
//! # API Surface
//!
//! The kernel exposes exactly two entry points:
//!
//! - [`search::search`] -- locate a value in a sorted slice by iterative binary search
//! - [`hanoi::solve`] -- produce the move sequence that solves Tower of Hanoi
//!
//! Both are pure: no I/O, no shared state, no allocation beyond the returned
//! move sequence. Every call is independent and safely reentrant.
//!
//! # Module Dependency Direction
//!
//! `error` ← `hanoi`; `search` depends on nothing internal. The two
//! algorithm modules never depend on each other.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod hanoi;
pub mod search;
