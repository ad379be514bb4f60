use thiserror::Error;

use crate::puzzle::{Move, Peg};

/// Errors raised when a solve is requested with arguments outside its contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HanoiError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl HanoiError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Errors raised while replaying moves against simulated towers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("move {index} ({mv}) references peg {peg}, which is not part of the puzzle")]
    UnknownPeg { index: u64, mv: Move, peg: Peg },

    #[error("move {index} ({mv}) puts a disk back on the peg it came from")]
    SamePeg { index: u64, mv: Move },

    #[error("move {index} ({mv}) takes a disk from an empty peg")]
    EmptyPeg { index: u64, mv: Move },

    #[error("move {index} ({mv}) places disk {disk} on smaller disk {below}")]
    LargerOnSmaller {
        index: u64,
        mv: Move,
        disk: u32,
        below: u32,
    },

    #[error("replay finished after {moves} moves without all disks on peg {target}")]
    Unsolved { moves: u64, target: Peg },
}
