//! Propensity tables for lattice diffusion.
//!
//! A [`PropensityTable`] is rebuilt from scratch before every event and
//! handed back by value. It is never stored on the reactor, so there is
//! no stale table to get out of sync with the lattice.

use drift_core::{CellIndex, StepError};
use drift_lattice::Lattice;
use rand::Rng;

use crate::sampling::{is_live, sample_waiting_time, select_weighted};

/// One candidate hop: move a particle from `source` to `destination`
/// with propensity `rate`.
///
/// At a clamped edge `source == destination`; selecting such an event
/// leaves occupancy unchanged but still counts as a step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Event {
    /// Propensity (probability per unit time). Never negative.
    pub rate: f64,
    /// Cell the particle leaves.
    pub source: CellIndex,
    /// Cell the particle enters.
    pub destination: CellIndex,
}

impl Event {
    /// Whether this is an edge self-transition.
    pub fn is_self_event(&self) -> bool {
        self.source == self.destination
    }
}

/// Every candidate event for the current occupancy, plus their total.
///
/// For a lattice of `N` cells the table holds exactly `2N` entries:
/// for cell `i`, diffuse-left at index `2i` then diffuse-right at
/// `2i + 1`. Empty cells contribute zero-rate entries so the layout
/// never depends on occupancy.
#[derive(Clone, Debug, PartialEq)]
pub struct PropensityTable {
    events: Vec<Event>,
    total: f64,
}

impl PropensityTable {
    /// Build the diffusion table for `occupancy` on `lattice` with
    /// per-direction rate constant `kd`.
    pub fn diffusion<L: Lattice + ?Sized>(lattice: &L, occupancy: &[u64], kd: f64) -> Self {
        debug_assert_eq!(lattice.cell_count(), occupancy.len());
        let mut events = Vec::with_capacity(occupancy.len() * 2);
        let mut total = 0.0;
        for (i, &count) in occupancy.iter().enumerate() {
            let source = CellIndex(i);
            let rate = kd * count as f64;
            for destination in lattice.neighbours(source) {
                events.push(Event {
                    rate,
                    source,
                    destination,
                });
                total += rate;
            }
        }
        Self { events, total }
    }

    /// Events in table order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Sum of all rates.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Number of entries (`2N`).
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the table has no entries. Never true for a valid lattice.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Whether at least one event can fire.
    pub fn is_live(&self) -> bool {
        is_live(self.total)
    }

    /// Select the next event, weighted by `rate / total`.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Event, StepError> {
        let index = select_weighted(self.events.iter().map(|e| e.rate), self.total, rng)?;
        Ok(self.events[index])
    }

    /// Sample the waiting time until the next event.
    pub fn delta<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, StepError> {
        sample_waiting_time(self.total, rng)
    }
}
