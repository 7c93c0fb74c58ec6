//! Shared setup for Drift benchmarks.
//!
//! [`reference_reactor`] builds the lattice every benchmark starts from
//! so the numbers stay comparable across runs.

#![forbid(unsafe_code)]

use drift_core::CellIndex;
use drift_engine::{Reactor, ReactorConfig};

/// Particles seeded by [`reference_reactor`], matching the demo display.
pub const REFERENCE_PARTICLES: u64 = 25_000;

/// A `cells`-wide reactor with all reference mass in the middle cell.
pub fn reference_reactor(cells: usize) -> Reactor {
    let config = ReactorConfig::new(cells, 0.1).seed(0xD81F7);
    let mut reactor = Reactor::from_config(config).expect("reference config is valid");
    reactor
        .set_occupancy(CellIndex(cells / 2), REFERENCE_PARTICLES)
        .expect("middle cell is in bounds");
    reactor
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_core::OccupancyAccess;

    #[test]
    fn reference_reactor_is_seeded() {
        let r = reference_reactor(10);
        assert_eq!(r.total_particles(), REFERENCE_PARTICLES);
        assert_eq!(r.occupancy()[5], REFERENCE_PARTICLES);
    }
}
