//! Generic Gillespie reactor over user-defined processes.
//!
//! Where [`Reactor`](crate::Reactor) hard-wires lattice hops,
//! [`ProcessReactor`] drives any set of [`Process`] implementations that
//! act on a shared state `S`. Each process reports its current rate
//! from the state and knows how to apply itself; the reactor does the
//! sampling. Processes are visited in insertion order, so a seeded run
//! is reproducible.

use std::fmt;

use drift_core::{ProcessId, StepCount, StepError};
use indexmap::IndexMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::sampling::{check_total, sample_waiting_time, select_weighted};

/// A stochastic process acting on state `S`.
pub trait Process<S>: Send {
    /// Current propensity given `state`. Negative or NaN values are
    /// treated as zero.
    fn rate(&self, state: &S) -> f64;

    /// Apply one occurrence of this process to `state`.
    fn perform(&mut self, state: &mut S);
}

/// Gillespie simulator over a dynamic set of boxed processes.
pub struct ProcessReactor<S> {
    sequence: u64,
    rng: ChaCha8Rng,
    seed: u64,
    steps: StepCount,
    time: f64,
    processes: IndexMap<ProcessId, Box<dyn Process<S>>>,
}

impl<S> ProcessReactor<S> {
    /// Create an empty reactor with a seeded RNG.
    pub fn new(seed: u64) -> Self {
        Self {
            sequence: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            steps: StepCount::default(),
            time: 0.0,
            processes: IndexMap::new(),
        }
    }

    /// Register a process and return its handle.
    pub fn add(&mut self, process: impl Process<S> + 'static) -> ProcessId {
        let id = ProcessId(self.sequence);
        self.sequence += 1;
        self.processes.insert(id, Box::new(process));
        id
    }

    /// Unregister a process. Returns `false` if `id` was not registered.
    pub fn remove(&mut self, id: ProcessId) -> bool {
        self.processes.shift_remove(&id).is_some()
    }

    /// Number of registered processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether no processes are registered.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Elapsed simulation time.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Number of completed events.
    pub fn steps(&self) -> StepCount {
        self.steps
    }

    /// Fire one process, chosen by rate, and return its id.
    ///
    /// # Errors
    ///
    /// [`StepError::DegenerateState`] if every process has zero rate (or
    /// none is registered), [`StepError::NonFinitePropensity`] if the rates
    /// sum to infinity. The reactor and `state` are left unchanged.
    ///
    /// [`StepError::NonFiniteWaitingTime`] and [`StepError::ClockOverflow`]
    /// leave `state`, clock, and counter unchanged but advance the RNG.
    pub fn step(&mut self, state: &mut S) -> Result<ProcessId, StepError> {
        let rates: Vec<f64> = self
            .processes
            .values()
            .map(|p| p.rate(state).max(0.0))
            .collect();
        let total: f64 = rates.iter().sum();
        if let Err(err) = check_total(total) {
            debug!(
                steps = self.steps.0,
                processes = self.processes.len(),
                total,
                %err,
                "step refused"
            );
            return Err(err);
        }
        let next = self.steps.increment().ok_or(StepError::CounterOverflow)?;

        let index = select_weighted(rates.iter().copied(), total, &mut self.rng)?;
        let elapsed = sample_waiting_time(total, &mut self.rng)?;
        let time = self.time + elapsed;
        if !time.is_finite() {
            return Err(StepError::ClockOverflow);
        }

        let (&id, process) = self
            .processes
            .get_index_mut(index)
            .ok_or(StepError::DegenerateState)?;
        process.perform(state);
        self.time = time;
        self.steps = next;

        trace!(step = self.steps.0, process = id.0, elapsed, "process fired");
        Ok(id)
    }

    /// Run [`step()`](ProcessReactor::step) `n` times, stopping at the
    /// first error.
    pub fn multistep(&mut self, state: &mut S, n: u64) -> Result<(), StepError> {
        for _ in 0..n {
            self.step(state)?;
        }
        Ok(())
    }
}

impl<S> fmt::Display for ProcessReactor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t: {}, n: {}", self.time, self.steps)
    }
}

impl<S> fmt::Debug for ProcessReactor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t: {}, n: {} [seq={}, processes={}, seed={}]",
            self.time,
            self.steps,
            self.sequence,
            self.processes.len(),
            self.seed
        )
    }
}
