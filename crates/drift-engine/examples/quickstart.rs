//! Drift Quickstart: stochastic diffusion from a point source.
//!
//! Demonstrates:
//!   1. Building a ReactorConfig and Reactor
//!   2. Seeding initial mass into one cell
//!   3. Stepping and reading occupancy/time between batches
//!   4. Handling the "no events possible" state
//!
//! Run with:
//!   RUST_LOG=drift_engine=debug cargo run --example quickstart

use drift_core::{CellIndex, OccupancyAccess, StepError};
use drift_engine::{Reactor, ReactorConfig};
use tracing_subscriber::EnvFilter;

const CELLS: usize = 10;
const TOTAL: u64 = 25_000;
const KD: f64 = 0.1;
const BATCH: u64 = 5_000;

fn render(reactor: &Reactor) -> String {
    let max = reactor.occupancy().iter().copied().max().unwrap_or(0).max(1);
    reactor
        .occupancy()
        .iter()
        .map(|&n| {
            let level = (n * 8 / max) as usize;
            [' ', '.', ':', '-', '=', '+', '*', '#', '@'][level]
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ReactorConfig::new(CELLS, KD).seed(42);
    let mut reactor = Reactor::from_config(config)?;
    reactor.set_occupancy(CellIndex(0), TOTAL)?;

    println!("{reactor}  |{}|", render(&reactor));
    for _ in 0..10 {
        reactor.multistep(BATCH)?;
        println!("{reactor}  |{}|", render(&reactor));
    }
    assert_eq!(reactor.total_particles(), TOTAL);

    // An empty lattice has nothing to simulate.
    let mut idle = Reactor::new(CELLS, KD)?;
    match idle.step() {
        Err(StepError::DegenerateState) => println!("empty lattice: {idle}, no events possible"),
        other => println!("unexpected: {other:?}"),
    }
    Ok(())
}
