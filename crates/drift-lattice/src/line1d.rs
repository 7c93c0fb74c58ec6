//! 1D line lattice with clamped edges.

use crate::lattice::Lattice;
use drift_core::{CellIndex, LatticeError};

/// A one-dimensional line lattice.
///
/// Each cell has index `i` where `0 <= i < len`. Edges are clamped:
/// the left neighbour of cell 0 is cell 0 and the right neighbour of
/// cell `len - 1` is cell `len - 1`. Moves past an edge therefore
/// reflect back onto the edge cell instead of wrapping.
///
/// # Examples
///
/// ```
/// use drift_core::CellIndex;
/// use drift_lattice::{Lattice, Line1D};
///
/// let line = Line1D::new(5).unwrap();
/// assert_eq!(line.cell_count(), 5);
///
/// // Interior cell: one step either way.
/// assert_eq!(line.neighbours(CellIndex(2)), [CellIndex(1), CellIndex(3)]);
///
/// // Left edge self-loops.
/// assert_eq!(line.neighbours(CellIndex(0)), [CellIndex(0), CellIndex(1)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line1D {
    len: usize,
}

impl Line1D {
    /// Maximum length. Every cell contributes two entries to the
    /// propensity table, so `len` is kept well inside `usize`.
    pub const MAX_LEN: usize = u32::MAX as usize;

    /// Create a new 1D line with `len` cells.
    ///
    /// Returns `Err(LatticeError::EmptyLattice)` if `len == 0`, or
    /// `Err(LatticeError::TooLarge)` if `len > MAX_LEN`.
    pub fn new(len: usize) -> Result<Self, LatticeError> {
        if len == 0 {
            return Err(LatticeError::EmptyLattice);
        }
        if len > Self::MAX_LEN {
            return Err(LatticeError::TooLarge {
                len,
                max: Self::MAX_LEN,
            });
        }
        Ok(Self { len })
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always returns `false`: construction rejects `len == 0`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Lattice for Line1D {
    fn cell_count(&self) -> usize {
        self.len
    }

    #[inline]
    fn neighbours(&self, cell: CellIndex) -> [CellIndex; 2] {
        let i = cell.get();
        let left = i.saturating_sub(1);
        let right = (i + 1).min(self.len - 1);
        [CellIndex(left), CellIndex(right)]
    }
}
