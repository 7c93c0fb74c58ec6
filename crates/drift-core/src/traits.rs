//! Read-only access to simulation state.

use crate::id::StepCount;

/// Read-only view of a lattice simulation after a step.
///
/// This is the whole contract offered to presentation code: it may read
/// occupancy, elapsed simulation time, and the completed-event count,
/// but never mutate them.
pub trait OccupancyAccess {
    /// Per-cell particle counts in canonical cell order.
    fn occupancy(&self) -> &[u64];

    /// Elapsed simulation time.
    fn time(&self) -> f64;

    /// Number of completed events.
    fn steps(&self) -> StepCount;

    /// Total number of particles across all cells.
    fn total_particles(&self) -> u64 {
        self.occupancy().iter().sum()
    }
}
