use std::fmt;

use crate::error::HanoiError;

/// A validated, non-negative number of disks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DiskCount(u32);

impl DiskCount {
    /// Validates a raw disk count. Negative values are a contract violation.
    pub fn new(n: i64) -> Result<Self, HanoiError> {
        if n < 0 {
            return Err(HanoiError::invalid_argument(format!(
                "disk count must be non-negative, got {n}"
            )));
        }
        u32::try_from(n).map(Self).map_err(|_| {
            HanoiError::invalid_argument(format!("disk count {n} does not fit in 32 bits"))
        })
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Number of moves in a full solution, `2^n - 1`.
    ///
    /// Returns `None` once the count no longer fits in a `u64` (n > 64).
    pub fn total_moves(self) -> Option<u64> {
        match self.0 {
            64 => Some(u64::MAX),
            n => 1u64.checked_shl(n).map(|p| p - 1),
        }
    }
}

impl From<u32> for DiskCount {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

impl fmt::Display for DiskCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
