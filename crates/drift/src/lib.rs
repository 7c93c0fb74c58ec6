//! Drift: exact stochastic simulation of particle diffusion on a lattice.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Drift sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use drift::prelude::*;
//!
//! let config = ReactorConfig::new(10, 0.1).seed(42);
//! let mut reactor = Reactor::from_config(config).unwrap();
//! reactor.set_occupancy(CellIndex(0), 1_000).unwrap();
//!
//! reactor.multistep(500).unwrap();
//! assert_eq!(reactor.total_particles(), 1_000);
//! assert_eq!(reactor.steps(), StepCount(500));
//!
//! // An empty lattice reports that nothing can happen.
//! let mut idle = Reactor::new(10, 0.1).unwrap();
//! assert_eq!(idle.step(), Err(StepError::DegenerateState));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `drift-core` | IDs, error types, read-only access trait |
//! | [`lattice`] | `drift-lattice` | Lattice trait and `Line1D` |
//! | [`engine`] | `drift-engine` | Reactors, sampling kernel, ensembles |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`drift-core`).
pub use drift_core as types;

/// Lattice topologies (`drift-lattice`).
pub use drift_lattice as lattice;

/// Simulation kernel and reactors (`drift-engine`).
pub use drift_engine as engine;

/// Common imports for typical Drift usage.
pub mod prelude {
    pub use drift_core::{
        CellIndex, ConfigError, LatticeError, OccupancyAccess, StepCount, StepError,
    };
    pub use drift_engine::{
        Event, Process, ProcessReactor, PropensityTable, Reactor, ReactorConfig, StepOutcome,
    };
    pub use drift_lattice::{Lattice, Line1D};
}
