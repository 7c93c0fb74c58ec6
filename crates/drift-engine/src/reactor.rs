//! The lattice diffusion reactor.
//!
//! [`Reactor`] owns a lattice's occupancy, the diffusion rate constant,
//! the simulation clock, the step counter, and a seeded RNG. Each
//! [`step()`](Reactor::step) fires exactly one Gillespie event:
//!
//! 1. rebuild the propensity table from current occupancy
//! 2. pick an event weighted by rate
//! 3. move one particle from its source to its destination
//! 4. advance the clock by an Exponential(total) waiting time
//! 5. bump the step counter
//!
//! # Ownership model
//!
//! `Reactor` is [`Send`]: independent reactors can be simulated on
//! separate threads with no synchronization. All mutating methods take
//! `&mut self`; presentation code reads state through
//! [`OccupancyAccess`] between steps.

use std::fmt;

use drift_core::{CellIndex, ConfigError, LatticeError, OccupancyAccess, StepCount, StepError};
use drift_lattice::{Lattice, Line1D};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::config::{validate_rate, ReactorConfig};
use crate::propensity::{Event, PropensityTable};
use crate::sampling::check_total;

// Compile-time assertion: Reactor is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Reactor>();
    }
};

// ── StepOutcome ─────────────────────────────────────────────────

/// What a successful [`Reactor::step()`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepOutcome {
    /// The event that fired.
    pub event: Event,
    /// Simulation time the clock advanced by.
    pub elapsed: f64,
}

// ── Reactor ─────────────────────────────────────────────────────

/// Gillespie simulator for particle diffusion on a lattice.
///
/// # Example
///
/// ```
/// use drift_core::{CellIndex, OccupancyAccess};
/// use drift_engine::Reactor;
///
/// let mut reactor = Reactor::new(10, 0.1).unwrap();
/// reactor.set_occupancy(CellIndex(0), 100).unwrap();
/// reactor.multistep(50).unwrap();
///
/// assert_eq!(reactor.total_particles(), 100);
/// assert_eq!(reactor.steps().0, 50);
/// assert!(reactor.time() > 0.0);
/// ```
pub struct Reactor<L: Lattice = Line1D> {
    lattice: L,
    cells: Vec<u64>,
    kd: f64,
    time: f64,
    steps: StepCount,
    seed: u64,
    rng: ChaCha8Rng,
}

impl Reactor<Line1D> {
    /// Create a reactor on a `cells`-wide line with diffusion rate `kd`
    /// and the default seed.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyLattice`] if `cells == 0`;
    /// [`ConfigError::InvalidDiffusionRate`] if `kd` is negative or not finite.
    pub fn new(cells: usize, kd: f64) -> Result<Self, ConfigError> {
        Self::from_config(ReactorConfig::new(cells, kd))
    }

    /// Create a reactor from a validated [`ReactorConfig`].
    pub fn from_config(config: ReactorConfig) -> Result<Self, ConfigError> {
        let lattice = config.build_lattice()?;
        Self::with_lattice(lattice, config.diffusion_rate, config.seed)
    }
}

impl<L: Lattice> Reactor<L> {
    /// Create a reactor over an arbitrary lattice topology.
    pub fn with_lattice(lattice: L, kd: f64, seed: u64) -> Result<Self, ConfigError> {
        validate_rate(kd)?;
        let cell_count = lattice.cell_count();
        if cell_count == 0 {
            return Err(ConfigError::EmptyLattice);
        }
        debug!(cells = cell_count, kd, seed, "reactor created");
        Ok(Self {
            lattice,
            cells: vec![0; cell_count],
            kd,
            time: 0.0,
            steps: StepCount::default(),
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    // ── Seeding ─────────────────────────────────────────────────

    /// Set the particle count of one cell.
    ///
    /// # Errors
    ///
    /// [`LatticeError::CellOutOfBounds`] for a bad index;
    /// [`LatticeError::ParticleOverflow`] if the lattice total would
    /// no longer fit in `u64`.
    pub fn set_occupancy(&mut self, cell: CellIndex, count: u64) -> Result<(), LatticeError> {
        let cell = self.lattice.check_cell(cell)?;
        let others = self.total_particles() - self.cells[cell.get()];
        if others.checked_add(count).is_none() {
            return Err(LatticeError::ParticleOverflow { cell: cell.get() });
        }
        self.cells[cell.get()] = count;
        Ok(())
    }

    /// Add `count` particles to one cell.
    pub fn add_particles(&mut self, cell: CellIndex, count: u64) -> Result<(), LatticeError> {
        let cell = self.lattice.check_cell(cell)?;
        if self.total_particles().checked_add(count).is_none() {
            return Err(LatticeError::ParticleOverflow { cell: cell.get() });
        }
        self.cells[cell.get()] += count;
        Ok(())
    }

    // ── Kernel ──────────────────────────────────────────────────

    /// Build the propensity table for the current occupancy.
    ///
    /// Pure: the reactor is not modified.
    pub fn update(&self) -> PropensityTable {
        PropensityTable::diffusion(&self.lattice, &self.cells, self.kd)
    }

    /// Sample a waiting time for total propensity `total` from this
    /// reactor's RNG.
    pub fn delta(&mut self, total: f64) -> Result<f64, StepError> {
        crate::sampling::sample_waiting_time(total, &mut self.rng)
    }

    /// Select an event from `table` using this reactor's RNG.
    pub fn choose(&mut self, table: &PropensityTable) -> Result<Event, StepError> {
        table.choose(&mut self.rng)
    }

    /// Advance by exactly one stochastic event.
    ///
    /// # Errors
    ///
    /// - [`StepError::DegenerateState`] when no event can fire (every cell
    ///   empty, or `kd == 0`).
    /// - [`StepError::NonFinitePropensity`] when `kd * occupancy` or the
    ///   total overflows.
    ///
    /// In both cases nothing is modified: lattice, clock, counter, and
    /// RNG stream are all left as they were.
    ///
    /// [`StepError::NonFiniteWaitingTime`] and [`StepError::ClockOverflow`]
    /// are reported after the draws, so the RNG has advanced, but the
    /// lattice, clock, and counter are still untouched.
    pub fn step(&mut self) -> Result<StepOutcome, StepError> {
        let table = self.update();
        if let Err(err) = check_total(table.total()) {
            debug!(
                steps = self.steps.0,
                time = self.time,
                total = table.total(),
                %err,
                "step refused"
            );
            return Err(err);
        }
        let next = self.steps.increment().ok_or(StepError::CounterOverflow)?;

        // Draw order is fixed: event first, then waiting time.
        let event = self.choose(&table)?;
        let elapsed = self.delta(table.total())?;
        let time = self.time + elapsed;
        if !time.is_finite() {
            return Err(StepError::ClockOverflow);
        }

        self.apply(&event);
        self.time = time;
        self.steps = next;

        trace!(
            step = self.steps.0,
            source = event.source.get(),
            destination = event.destination.get(),
            elapsed,
            "event fired"
        );
        Ok(StepOutcome { event, elapsed })
    }

    /// Run [`step()`](Reactor::step) `n` times. `n == 0` is a no-op.
    ///
    /// Stops at the first error; steps completed before it stand.
    pub fn multistep(&mut self, n: u64) -> Result<(), StepError> {
        for _ in 0..n {
            self.step()?;
        }
        Ok(())
    }

    fn apply(&mut self, event: &Event) {
        if event.is_self_event() {
            return;
        }
        // A selected event has positive rate, so its source is non-empty.
        self.cells[event.source.get()] -= 1;
        self.cells[event.destination.get()] += 1;
    }

    // ── Accessors ───────────────────────────────────────────────

    /// Number of lattice cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Per-direction diffusion rate constant.
    pub fn diffusion_rate(&self) -> f64 {
        self.kd
    }

    /// Seed the RNG was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The lattice topology.
    pub fn lattice(&self) -> &L {
        &self.lattice
    }
}

impl<L: Lattice> OccupancyAccess for Reactor<L> {
    fn occupancy(&self) -> &[u64] {
        &self.cells
    }

    fn time(&self) -> f64 {
        self.time
    }

    fn steps(&self) -> StepCount {
        self.steps
    }
}

impl<L: Lattice> fmt::Display for Reactor<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t: {}, n: {}", self.time, self.steps)
    }
}

impl<L: Lattice> fmt::Debug for Reactor<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t: {}, n: {} [cells={}, kD={}, seed={}]",
            self.time,
            self.steps,
            self.cells.len(),
            self.kd,
            self.seed
        )
    }
}
