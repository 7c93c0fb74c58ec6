//! End-to-end properties of lattice diffusion through the public API.
//!
//! Each test seeds a reactor, steps it, and checks an observable that
//! presentation code would rely on: conservation, clamped edges, the
//! waiting-time law, and reproducibility.

use drift_core::{CellIndex, OccupancyAccess, StepCount, StepError};
use drift_engine::{Reactor, ReactorConfig};
use drift_test_utils::stats::ks_statistic;
use drift_test_utils::{point_source, spread_evenly};

// ── Helpers ─────────────────────────────────────────────────────

fn reactor_with(occupancy: &[u64], kd: f64, seed: u64) -> Reactor {
    let config = ReactorConfig::new(occupancy.len(), kd).seed(seed);
    let mut reactor = Reactor::from_config(config).unwrap();
    for (i, &count) in occupancy.iter().enumerate() {
        reactor.set_occupancy(CellIndex(i), count).unwrap();
    }
    reactor
}

// ── Scenarios ───────────────────────────────────────────────────

#[test]
fn three_cell_scenario_propensities() {
    let reactor = reactor_with(&[10, 0, 0], 0.1, 0);
    let table = reactor.update();
    let triples: Vec<(f64, usize, usize)> = table
        .events()
        .iter()
        .map(|e| (e.rate, e.source.get(), e.destination.get()))
        .collect();
    assert_eq!(
        triples,
        vec![
            (1.0, 0, 0),
            (1.0, 0, 1),
            (0.0, 1, 0),
            (0.0, 1, 2),
            (0.0, 2, 1),
            (0.0, 2, 2),
        ]
    );
    assert_eq!(table.total(), 2.0);
}

#[test]
fn zero_rate_reactor_never_produces_nan() {
    let mut reactor = reactor_with(&[0, 7, 0, 3, 0], 0.0, 1);
    for _ in 0..100 {
        assert_eq!(reactor.step(), Err(StepError::DegenerateState));
    }
    assert_eq!(reactor.occupancy(), &[0, 7, 0, 3, 0]);
    assert_eq!(reactor.time(), 0.0);
    assert_eq!(reactor.steps(), StepCount(0));
}

#[test]
fn extreme_rates_surface_as_errors_not_infinity() {
    let mut tiny = reactor_with(&[0, 1, 0], 5e-324, 1);
    assert_eq!(tiny.step(), Err(StepError::NonFiniteWaitingTime));
    assert_eq!(tiny.time(), 0.0);
    assert_eq!(tiny.steps(), StepCount(0));

    let mut huge = reactor_with(&[0, 10, 0], 1e308, 1);
    assert_eq!(huge.step(), Err(StepError::NonFinitePropensity));
    assert_eq!(huge.total_particles(), 10);
    assert_eq!(huge.time(), 0.0);
    assert_eq!(huge.steps(), StepCount(0));
}

// ── Invariants ──────────────────────────────────────────────────

#[test]
fn mass_is_conserved_over_long_runs() {
    let mut reactor = reactor_with(&spread_evenly(16, 1_000), 0.7, 2);
    for _ in 0..50 {
        reactor.multistep(200).unwrap();
        assert_eq!(reactor.total_particles(), 1_000);
    }
    assert_eq!(reactor.steps(), StepCount(10_000));
}

#[test]
fn clock_never_decreases_and_counter_never_skips() {
    let mut reactor = reactor_with(&point_source(6, CellIndex(3), 25), 0.4, 3);
    let mut last_time = reactor.time();
    for k in 1..=2_000u64 {
        reactor.step().unwrap();
        assert!(reactor.time() >= last_time);
        assert_eq!(reactor.steps(), StepCount(k));
        last_time = reactor.time();
    }
}

#[test]
fn left_edge_mass_stays_on_lattice() {
    let cells = 4;
    let mut reactor = reactor_with(&point_source(cells, CellIndex(0), 30), 1.0, 4);
    let mut self_events = 0;
    for _ in 0..5_000 {
        let outcome = reactor.step().unwrap();
        assert!(outcome.event.destination.get() < cells);
        if outcome.event.source == CellIndex(0) && outcome.event.is_self_event() {
            self_events += 1;
        }
    }
    assert!(self_events > 0, "left-edge moves must appear as self-events");
    assert_eq!(reactor.total_particles(), 30);
}

#[test]
fn single_cell_lattice_only_self_loops() {
    let mut reactor = reactor_with(&[12], 0.5, 5);
    for _ in 0..100 {
        let outcome = reactor.step().unwrap();
        assert!(outcome.event.is_self_event());
    }
    assert_eq!(reactor.occupancy(), &[12]);
    assert_eq!(reactor.steps(), StepCount(100));
}

// ── Statistics ──────────────────────────────────────────────────

#[test]
fn single_cell_waiting_times_are_exponential() {
    // One cell keeps the total propensity fixed at 2 * kd * n.
    let mut reactor = reactor_with(&[5], 0.2, 6);
    let total = 2.0 * 0.2 * 5.0;
    let samples: Vec<f64> = (0..10_000)
        .map(|_| reactor.step().unwrap().elapsed)
        .collect();
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    assert!((mean - 1.0 / total).abs() < 0.05, "mean {mean}");
    let d = ks_statistic(samples, |x| 1.0 - (-total * x).exp());
    assert!(d < 0.0195, "KS statistic {d}");
}

#[test]
fn delta_uses_supplied_total() {
    let mut reactor = reactor_with(&[1, 0], 0.1, 7);
    let total = 4.0;
    let n = 20_000;
    let mean = (0..n).map(|_| reactor.delta(total).unwrap()).sum::<f64>() / n as f64;
    assert!((mean - 0.25).abs() < 0.01, "mean {mean}");
    assert_eq!(reactor.delta(0.0), Err(StepError::DegenerateState));
}

// ── Determinism ─────────────────────────────────────────────────

#[test]
fn same_seed_reproduces_trajectory() {
    let run = |seed| {
        let mut reactor = reactor_with(&point_source(10, CellIndex(0), 100), 0.1, seed);
        reactor.multistep(3_000).unwrap();
        (reactor.occupancy().to_vec(), reactor.time().to_bits())
    };
    assert_eq!(run(42), run(42));
    assert_ne!(run(42), run(43));
}

#[test]
fn independent_reactors_on_threads() {
    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            let mut reactor = reactor_with(&point_source(8, CellIndex(4), 50), 0.3, seed);
            std::thread::spawn(move || {
                reactor.multistep(1_000).unwrap();
                reactor.total_particles()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 50);
    }
}
