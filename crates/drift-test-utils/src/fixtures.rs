//! Initial-occupancy fixtures.
//!
//! The kernel never assigns initial mass itself; tests seed it with
//! one of these layouts before the first step.

use drift_core::CellIndex;

/// All `count` particles in a single cell of a `cells`-wide lattice.
pub fn point_source(cells: usize, at: CellIndex, count: u64) -> Vec<u64> {
    assert!(at.get() < cells, "source cell {at} outside {cells} cells");
    let mut occupancy = vec![0; cells];
    occupancy[at.get()] = count;
    occupancy
}

/// `count` particles dealt round-robin across `cells` cells, so no two
/// cells differ by more than one particle.
pub fn spread_evenly(cells: usize, count: u64) -> Vec<u64> {
    assert!(cells > 0, "need at least one cell");
    let base = count / cells as u64;
    let extra = (count % cells as u64) as usize;
    (0..cells)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}
