//! Gillespie stochastic simulation kernel for Drift.
//!
//! Provides the lattice diffusion [`Reactor`], the shared sampling
//! kernel, a generic [`ProcessReactor`] for arbitrary reaction sets,
//! and parallel ensembles of independent trajectories.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod ensemble;
pub mod process;
pub mod propensity;
pub mod reactor;
pub mod sampling;
pub mod systems;

pub use config::ReactorConfig;
pub use ensemble::{run_ensemble, EnsembleError, Trajectory};
pub use process::{Process, ProcessReactor};
pub use propensity::{Event, PropensityTable};
pub use reactor::{Reactor, StepOutcome};
