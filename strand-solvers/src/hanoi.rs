//! Towers of Hanoi.
//!
//! The goal is to move a tower of disks from the left peg to the right peg:
//! disks start stacked large to small from bottom to top, only one disk
//! moves at a time, and a disk may never rest on a smaller one. The solver
//! returns the move list rather than printing it, and a plan for n disks
//! always has 2^n - 1 moves.

use core::fmt;

use crate::memo::Memo;

/// A peg in the puzzle, numbered 1 to 3 left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peg {
    /// Peg 1, where all disks start.
    Left,
    /// Peg 2, the spare.
    Middle,
    /// Peg 3, the destination.
    Right,
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = match self {
            Self::Left => 1,
            Self::Middle => 2,
            Self::Right => 3,
        };
        write!(f, "{number}")
    }
}

/// One move of the topmost disk between two pegs.
///
/// Renders as the instruction a player would follow:
///
/// ```
/// use strand_solvers::hanoi::{Move, Peg};
///
/// let m = Move { from: Peg::Left, to: Peg::Right };
/// assert_eq!(m.to_string(), "Move one disk from 1 to 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Peg the disk leaves.
    pub from: Peg,
    /// Peg the disk lands on.
    pub to: Peg,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move one disk from {} to {}", self.from, self.to)
    }
}

/// Returns the full move plan for `disks` disks.
///
/// Zero disks need zero moves.
pub fn solve(disks: u32) -> Vec<Move> {
    let mut moves = Vec::new();
    if disks > 0 {
        move_disks(disks, Peg::Left, Peg::Right, Peg::Middle, &mut moves);
    }
    moves
}

/// Moves the top `count` disks from `from` to `to` using `via` as scratch.
fn move_disks(count: u32, from: Peg, to: Peg, via: Peg, moves: &mut Vec<Move>) {
    if count == 1 {
        moves.push(Move { from, to });
        return;
    }

    move_disks(count - 1, from, via, to, moves);
    moves.push(Move { from, to });
    move_disks(count - 1, via, to, from, moves);
}

/// Towers of Hanoi solver that caches subplans.
///
/// The subproblem "move `count` disks from `from` to `to` via `via`" recurs
/// across calls with different disk counts, so its whole move list is cached
/// keyed by those four arguments.
#[derive(Debug, Default)]
pub struct MemoizedHanoi {
    cache: Memo<(u32, Peg, Peg, Peg), Vec<Move>>,
}

impl MemoizedHanoi {
    /// Creates a solver with an empty cache.
    pub fn new() -> Self {
        Self { cache: Memo::new() }
    }

    /// Returns the full move plan for `disks` disks.
    pub fn solve(&mut self, disks: u32) -> Vec<Move> {
        if disks == 0 {
            return Vec::new();
        }
        self.move_disks(disks, Peg::Left, Peg::Right, Peg::Middle)
    }

    /// Returns the number of cached subplans.
    pub fn cached_plans(&self) -> usize {
        self.cache.len()
    }

    fn move_disks(&mut self, count: u32, from: Peg, to: Peg, via: Peg) -> Vec<Move> {
        let key = (count, from, to, via);
        if let Some(plan) = self.cache.get(&key) {
            return plan.clone();
        }

        let plan = if count == 1 {
            vec![Move { from, to }]
        } else {
            let mut plan = self.move_disks(count - 1, from, via, to);
            plan.push(Move { from, to });
            plan.extend(self.move_disks(count - 1, via, to, from));
            plan
        };

        self.cache.insert(key, plan.clone());
        plan
    }
}
