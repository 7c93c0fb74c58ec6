//! Reference systems built on [`ProcessReactor`](crate::ProcessReactor).
//!
//! - [`constant`]: fixed-rate processes that tally how often each fires
//! - [`dimer`]: the `A + B <-> AB` mass-action reaction

pub mod constant;
pub mod dimer;
