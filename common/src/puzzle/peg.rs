use std::fmt;

use crate::error::HanoiError;

/// Labels used by the reference run: source 1, auxiliary 2, destination 3.
pub const DEFAULT_PEGS: (u32, u32, u32) = (1, 2, 3);

/// Identifies one of the three pegs. Rendered as its decimal label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Peg(pub u32);

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Peg {
    fn from(label: u32) -> Self {
        Self(label)
    }
}

/// The roles of the three pegs for a single transfer.
///
/// The three labels are always pairwise distinct: the only ways to get a
/// `PegSet` are the checked constructors and role swaps of an existing set.
///
/// ```compile_fail
/// use hanoi_common::puzzle::{Peg, PegSet};
///
/// let pegs = PegSet { from: Peg(1), using: Peg(1), to: Peg(3) };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PegSet {
    from: Peg,
    using: Peg,
    to: Peg,
}

impl PegSet {
    /// Builds a peg set, rejecting labels that are not pairwise distinct.
    pub fn new(from: Peg, using: Peg, to: Peg) -> Result<Self, HanoiError> {
        if from == using || from == to || using == to {
            return Err(HanoiError::invalid_argument(format!(
                "pegs must be distinct, got from={from} using={using} to={to}"
            )));
        }
        Ok(Self { from, using, to })
    }

    pub fn from(&self) -> Peg {
        self.from
    }

    pub fn using(&self) -> Peg {
        self.using
    }

    pub fn to(&self) -> Peg {
        self.to
    }

    pub fn as_array(&self) -> [Peg; 3] {
        [self.from, self.using, self.to]
    }

    /// Same source, with the destination and auxiliary pegs exchanged.
    pub fn toward_auxiliary(self) -> Self {
        Self {
            from: self.from,
            using: self.to,
            to: self.using,
        }
    }

    /// Same destination, with the source and auxiliary pegs exchanged.
    pub fn from_auxiliary(self) -> Self {
        Self {
            from: self.using,
            using: self.from,
            to: self.to,
        }
    }
}

impl Default for PegSet {
    fn default() -> Self {
        let (from, using, to) = DEFAULT_PEGS;
        Self {
            from: Peg(from),
            using: Peg(using),
            to: Peg(to),
        }
    }
}

impl TryFrom<(u32, u32, u32)> for PegSet {
    type Error = HanoiError;

    fn try_from((from, using, to): (u32, u32, u32)) -> Result<Self, Self::Error> {
        Self::new(Peg(from), Peg(using), Peg(to))
    }
}
