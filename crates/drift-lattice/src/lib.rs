//! Lattice topologies for Drift simulations.
//!
//! This crate defines the [`Lattice`] trait, the spatial abstraction the
//! reactor uses to enumerate diffusion moves, along with the concrete
//! [`Line1D`] backend.
//!
//! # Backends
//!
//! - [`Line1D`]: 1D line with clamped (reflecting) edges

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod lattice;
pub mod line1d;

pub use lattice::Lattice;
pub use line1d::Line1D;
