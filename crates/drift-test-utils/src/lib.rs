//! Test utilities for Drift development.
//!
//! Provides initial-occupancy fixtures and the goodness-of-fit helpers
//! used by the statistical tests of the sampling kernel.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod stats;

pub use fixtures::{point_source, spread_evenly};
