//! Strongly-typed identifiers.

use std::fmt;

/// Index of a cell within a lattice.
///
/// Cell `CellIndex(n)` is the n-th cell in canonical order, `0 <= n < len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex(pub usize);

impl CellIndex {
    /// The underlying index, for slice access.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for CellIndex {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

/// Number of completed stochastic events.
///
/// Starts at zero and grows by exactly one per step. Incrementing is
/// checked: [`StepCount::increment`] returns `None` instead of wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepCount(pub u64);

impl StepCount {
    /// The count that follows this one, or `None` on overflow.
    pub fn increment(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for StepCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepCount {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Handle for a process registered with a process reactor.
///
/// Allocated from a per-reactor monotonic sequence, so a removed
/// process's id is never handed out again by the same reactor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProcessId(pub u64);

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProcessId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
