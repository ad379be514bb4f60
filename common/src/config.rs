use crate::puzzle::DEFAULT_PEGS;

/// Number of disks moved when nothing else is requested.
pub const DEFAULT_DISK_COUNT: i64 = 5;

/// Run configuration, owned by the entry point.
///
/// The solver never reads this directly; the binary turns it into a
/// validated [`DiskCount`](crate::puzzle::DiskCount) and
/// [`PegSet`](crate::puzzle::PegSet) before solving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Controls recursion depth and the total move count (2^n - 1).
    /// Signed: negative requests are rejected by validation, not parsing.
    pub disk_count: i64,
    /// Labels of the source, auxiliary and destination pegs, in that order.
    pub pegs: (u32, u32, u32),
    /// Replays the generated moves against simulated towers after printing.
    pub verify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            disk_count: DEFAULT_DISK_COUNT,
            pegs: DEFAULT_PEGS,
            verify: false,
        }
    }
}
