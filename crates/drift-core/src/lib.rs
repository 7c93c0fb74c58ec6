//! Core types and traits for the Drift simulation workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the identifiers, error types, and read-only access trait shared by
//! the lattice and engine crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod traits;

pub use error::{ConfigError, LatticeError, StepError};
pub use id::{CellIndex, ProcessId, StepCount};
pub use traits::OccupancyAccess;
