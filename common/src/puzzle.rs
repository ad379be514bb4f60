//! # Puzzle Vocabulary
//!
//! The value types shared by the solver, the replay simulator and the CLI.
//! None of them carry disk stacks; pegs are plain labels.

mod disks;
mod moves;
mod peg;

pub use disks::DiskCount;
pub use moves::Move;
pub use peg::{DEFAULT_PEGS, Peg, PegSet};
