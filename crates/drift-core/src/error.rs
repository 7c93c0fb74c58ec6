//! Error types for the Drift simulation workspace.
//!
//! Organized by subsystem: lattice topology and seeding, reactor
//! configuration, and stepping.

use thiserror::Error;

/// Errors from lattice construction and cell addressing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LatticeError {
    /// Attempted to construct a lattice with zero cells.
    #[error("lattice must have at least one cell")]
    EmptyLattice,
    /// Requested length exceeds the supported maximum.
    #[error("lattice length {len} exceeds maximum {max}")]
    TooLarge {
        /// The requested length.
        len: usize,
        /// The largest supported length.
        max: usize,
    },
    /// A cell index is outside `[0, len)`.
    #[error("cell {cell} out of bounds for lattice of {len} cells")]
    CellOutOfBounds {
        /// The offending index.
        cell: usize,
        /// Number of cells in the lattice.
        len: usize,
    },
    /// Adding particles would overflow a cell's `u64` count.
    #[error("particle count overflow at cell {cell}")]
    ParticleOverflow {
        /// The cell whose count would overflow.
        cell: usize,
    },
}

/// Errors detected while validating a reactor configuration.
///
/// Construction fails fast with one of these rather than producing
/// undefined index or rate behavior during stepping.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Lattice has zero cells.
    #[error("invalid configuration: lattice has zero cells")]
    EmptyLattice,
    /// Diffusion rate is negative, NaN, or infinite.
    #[error("invalid configuration: diffusion rate must be finite and >= 0, got {value}")]
    InvalidDiffusionRate {
        /// The rejected value.
        value: f64,
    },
    /// Lattice construction failed.
    #[error("invalid configuration: {0}")]
    Lattice(#[from] LatticeError),
}

/// Errors from a single stochastic step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StepError {
    /// Total propensity is zero: no event can fire.
    ///
    /// The reactor is left untouched: clock, counter, and state are
    /// exactly as they were before the call.
    #[error("degenerate state: total propensity is zero, no events possible")]
    DegenerateState,
    /// Total propensity overflowed to infinity or is NaN.
    ///
    /// Events are possible but their rates are not representable. Nothing
    /// is modified.
    #[error("total propensity is not finite")]
    NonFinitePropensity,
    /// The sampled waiting time is not finite, which happens when the
    /// total propensity is positive but vanishingly small.
    ///
    /// Lattice, clock, and counter are unchanged; the RNG has advanced.
    #[error("waiting time is not finite")]
    NonFiniteWaitingTime,
    /// Advancing the clock would overflow to infinity.
    #[error("simulation clock overflow")]
    ClockOverflow,
    /// The step counter would overflow `u64`.
    #[error("step counter overflow")]
    CounterOverflow,
}
