//! # Move-Sequence Generator
//!
//! Produces the moves that transfer a tower of `n` disks from one peg to
//! another, one disk at a time, never placing a disk on a smaller one.
//!
//! The classic recursion (move `n - 1` disks out of the way, move the largest
//! disk, move the `n - 1` disks back on top) is driven by an explicit work
//! stack instead of the call stack, so the sequence is produced lazily and
//! the memory used is proportional to `n`, not to the number of moves.

use hanoi_common::config::Config;
use hanoi_common::error::HanoiError;
use hanoi_common::puzzle::{DiskCount, Move, PegSet};
use tracing::debug;

/// Pending work on the stack. Popped in LIFO order.
#[derive(Debug, Clone, Copy)]
enum Task {
    /// Move `disks` disks from `pegs.from()` to `pegs.to()` through `pegs.using()`.
    Transfer { disks: u32, pegs: PegSet },
    /// Yield a single move.
    Emit(Move),
}

/// Lazy, ordered iterator over the moves of one solution.
#[derive(Debug, Clone)]
pub struct Moves {
    stack: Vec<Task>,
    remaining: Option<u64>,
}

impl Moves {
    fn new(disks: DiskCount, pegs: PegSet) -> Self {
        // Capped: towers past 64 disks cannot be exhausted anyway.
        let mut stack = Vec::with_capacity(2 * disks.get().min(64) as usize + 1);
        if disks.get() > 0 {
            stack.push(Task::Transfer {
                disks: disks.get(),
                pegs,
            });
        }
        Self {
            stack,
            remaining: disks.total_moves(),
        }
    }

    /// Moves not yet yielded, or `None` if the total does not fit in a `u64`.
    pub fn remaining(&self) -> Option<u64> {
        self.remaining
    }
}

impl Iterator for Moves {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        loop {
            match self.stack.pop()? {
                Task::Emit(mv) => {
                    if let Some(remaining) = self.remaining.as_mut() {
                        *remaining -= 1;
                    }
                    return Some(mv);
                }
                Task::Transfer { disks, pegs } => {
                    let smaller = disks - 1;
                    // Pushed in reverse: clear the way, move the largest disk, restack.
                    if smaller > 0 {
                        self.stack.push(Task::Transfer {
                            disks: smaller,
                            pegs: pegs.from_auxiliary(),
                        });
                    }
                    self.stack.push(Task::Emit(Move::new(pegs.from(), pegs.to())));
                    if smaller > 0 {
                        self.stack.push(Task::Transfer {
                            disks: smaller,
                            pegs: pegs.toward_auxiliary(),
                        });
                    }
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.and_then(|r| usize::try_from(r).ok()) {
            Some(r) => (r, Some(r)),
            None => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for Moves {}

/// Generates the moves transferring `disks` disks from `pegs.from()` to `pegs.to()`.
pub fn solve(disks: DiskCount, pegs: PegSet) -> Moves {
    debug!(
        "Solving {} disks from peg {} to peg {} using peg {}",
        disks,
        pegs.from(),
        pegs.to(),
        pegs.using()
    );
    Moves::new(disks, pegs)
}

/// A solve request whose arguments have been validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub disks: DiskCount,
    pub pegs: PegSet,
}

impl Puzzle {
    /// Validates a raw disk count and peg labels.
    ///
    /// Fails with [`HanoiError::InvalidArgument`] when `n` is negative or the
    /// labels are not distinct.
    pub fn new(n: i64, pegs: (u32, u32, u32)) -> Result<Self, HanoiError> {
        Ok(Self {
            disks: DiskCount::new(n)?,
            pegs: PegSet::try_from(pegs)?,
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self, HanoiError> {
        Self::new(cfg.disk_count, cfg.pegs)
    }

    /// A fresh iterator over the full solution. Every call yields the same moves.
    pub fn moves(&self) -> Moves {
        solve(self.disks, self.pegs)
    }
}
