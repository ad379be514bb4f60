//! # Replay Simulator
//!
//! Materializes the three disk stacks and replays a move sequence against
//! them, checking every move against the puzzle rules. The generator never
//! needs this; it exists to verify a sequence after the fact.

use hanoi_common::error::ReplayError;
use hanoi_common::puzzle::{DiskCount, Move, Peg, PegSet};
use tracing::{debug, info};

/// Three pegs holding disks, numbered `1..=n` with `n` the largest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Towers {
    pegs: PegSet,
    stacks: [Vec<u32>; 3],
    applied: u64,
}

impl Towers {
    /// All disks stacked on `pegs.from()`, largest at the bottom.
    pub fn new(disks: DiskCount, pegs: PegSet) -> Self {
        let source: Vec<u32> = (1..=disks.get()).rev().collect();
        Self {
            pegs,
            stacks: [source, Vec::new(), Vec::new()],
            applied: 0,
        }
    }

    fn slot(&self, peg: Peg) -> Option<usize> {
        self.pegs.as_array().iter().position(|p| *p == peg)
    }

    /// Disks on `peg`, bottom first. Empty for labels outside the puzzle.
    pub fn stack(&self, peg: Peg) -> &[u32] {
        self.slot(peg).map_or(&[][..], |i| self.stacks[i].as_slice())
    }

    pub fn applied(&self) -> u64 {
        self.applied
    }

    /// Applies a single move, leaving the towers untouched if it is illegal.
    pub fn apply(&mut self, mv: Move) -> Result<(), ReplayError> {
        let index = self.applied;
        let src = self
            .slot(mv.from)
            .ok_or(ReplayError::UnknownPeg { index, mv, peg: mv.from })?;
        let dst = self
            .slot(mv.to)
            .ok_or(ReplayError::UnknownPeg { index, mv, peg: mv.to })?;

        if src == dst {
            return Err(ReplayError::SamePeg { index, mv });
        }

        let disk = *self.stacks[src]
            .last()
            .ok_or(ReplayError::EmptyPeg { index, mv })?;

        if let Some(&below) = self.stacks[dst].last() {
            if below < disk {
                return Err(ReplayError::LargerOnSmaller {
                    index,
                    mv,
                    disk,
                    below,
                });
            }
        }
        self.stacks[src].pop();
        self.stacks[dst].push(disk);

        self.applied += 1;
        Ok(())
    }

    /// True once the source and auxiliary pegs are empty.
    ///
    /// Disk order on the destination needs no separate check: every applied
    /// move kept each stack sorted.
    pub fn is_solved(&self) -> bool {
        self.stacks[0].is_empty() && self.stacks[1].is_empty()
    }
}

/// Replays `moves` from the starting position and checks the final state.
///
/// Returns the number of moves applied.
pub fn replay<I>(disks: DiskCount, pegs: PegSet, moves: I) -> Result<u64, ReplayError>
where
    I: IntoIterator<Item = Move>,
{
    let mut towers = Towers::new(disks, pegs);
    for mv in moves {
        towers.apply(mv)?;
    }

    if !towers.is_solved() {
        debug!("Towers after replay: {:?}", towers.stacks);
        return Err(ReplayError::Unsolved {
            moves: towers.applied(),
            target: pegs.to(),
        });
    }

    info!(
        "Verified {} moves: all {} disks on peg {}",
        towers.applied(),
        disks,
        pegs.to()
    );
    Ok(towers.applied())
}
