//! Independent trajectories run in parallel.
//!
//! Reactors share no mutable state, so an ensemble is just many of
//! them on a rayon pool. Each member gets its own seed derived from
//! the base seed and its trajectory index with SplitMix64, so results
//! do not depend on thread scheduling.

use drift_core::{CellIndex, ConfigError, LatticeError, OccupancyAccess, StepCount, StepError};
use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::config::ReactorConfig;
use crate::reactor::Reactor;

/// Errors from [`run_ensemble`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EnsembleError {
    /// The shared configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The initial occupancy does not fit the lattice.
    #[error(transparent)]
    Lattice(#[from] LatticeError),
    /// The initial occupancy has the wrong number of cells.
    #[error("initial occupancy has {got} cells, lattice has {expected}")]
    InitialLength {
        /// Cells in the configured lattice.
        expected: usize,
        /// Cells in the supplied occupancy.
        got: usize,
    },
    /// A trajectory failed for a reason other than running out of events.
    #[error("trajectory {trajectory}: {source}")]
    Step {
        /// Index of the failing trajectory.
        trajectory: usize,
        /// The underlying step error.
        #[source]
        source: StepError,
    },
}

/// Final state of one ensemble member.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    /// Seed this member's RNG was created from.
    pub seed: u64,
    /// Occupancy after the run.
    pub occupancy: Vec<u64>,
    /// Elapsed simulation time.
    pub time: f64,
    /// Completed events.
    pub steps: StepCount,
    /// Whether the member stopped early because no event could fire.
    pub halted: bool,
}

/// Derive the seed of trajectory `index` from `base`.
pub fn derive_seed(base: u64, index: u64) -> u64 {
    const GOLDEN_GAMMA: u64 = 0x9E3779B97F4A7C15;
    let mut z = base ^ index.wrapping_mul(GOLDEN_GAMMA);
    z = z.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Run `trajectories` independent reactors from the same initial
/// occupancy for up to `steps` events each.
///
/// Members that hit [`StepError::DegenerateState`] stop early and are
/// reported with `halted = true`; any other step error aborts the run.
pub fn run_ensemble(
    config: &ReactorConfig,
    initial: &[u64],
    trajectories: usize,
    steps: u64,
) -> Result<Vec<Trajectory>, EnsembleError> {
    config.validate()?;
    if initial.len() != config.cells {
        return Err(EnsembleError::InitialLength {
            expected: config.cells,
            got: initial.len(),
        });
    }
    debug!(trajectories, steps, cells = config.cells, "running ensemble");

    (0..trajectories)
        .into_par_iter()
        .map(|index| -> Result<Trajectory, EnsembleError> {
            let seed = derive_seed(config.seed, index as u64);
            let mut reactor = Reactor::from_config(config.clone().seed(seed))?;
            for (cell, &count) in initial.iter().enumerate() {
                reactor.set_occupancy(CellIndex(cell), count)?;
            }
            let halted = match reactor.multistep(steps) {
                Ok(()) => false,
                Err(StepError::DegenerateState) => true,
                Err(source) => {
                    return Err(EnsembleError::Step {
                        trajectory: index,
                        source,
                    })
                }
            };
            Ok(Trajectory {
                seed,
                occupancy: reactor.occupancy().to_vec(),
                time: reactor.time(),
                steps: reactor.steps(),
                halted,
            })
        })
        .collect()
}

/// Mean occupancy per cell across an ensemble.
pub fn mean_occupancy(members: &[Trajectory]) -> Vec<f64> {
    let Some(first) = members.first() else {
        return Vec::new();
    };
    let mut sums = vec![0.0; first.occupancy.len()];
    for member in members {
        for (sum, &count) in sums.iter_mut().zip(&member.occupancy) {
            *sum += count as f64;
        }
    }
    let n = members.len() as f64;
    sums.into_iter().map(|s| s / n).collect()
}
