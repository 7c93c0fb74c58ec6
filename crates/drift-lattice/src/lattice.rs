//! The [`Lattice`] trait.

use drift_core::{CellIndex, LatticeError};

/// A finite lattice of cells with a fixed nearest-neighbour topology.
///
/// Every cell has exactly two neighbour slots, left then right. At an
/// edge the missing neighbour is the edge cell itself, so a move that
/// would leave the lattice becomes a self-transition.
pub trait Lattice: Send + 'static {
    /// Number of cells. Always at least one.
    fn cell_count(&self) -> usize;

    /// Left and right neighbours of `cell`, in that order.
    ///
    /// `cell` must be in bounds; behavior for out-of-range cells is
    /// backend-defined. Use [`check_cell`](Lattice::check_cell) first
    /// for untrusted input.
    fn neighbours(&self, cell: CellIndex) -> [CellIndex; 2];

    /// Whether `cell` lies inside the lattice.
    fn contains(&self, cell: CellIndex) -> bool {
        cell.get() < self.cell_count()
    }

    /// Validate an untrusted cell index.
    fn check_cell(&self, cell: CellIndex) -> Result<CellIndex, LatticeError> {
        if self.contains(cell) {
            Ok(cell)
        } else {
            Err(LatticeError::CellOutOfBounds {
                cell: cell.get(),
                len: self.cell_count(),
            })
        }
    }
}
