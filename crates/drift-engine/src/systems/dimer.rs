//! The `A + B <-> AB` dimerization reaction under mass action.
//!
//! Species are indexed `0 = A`, `1 = B`, `2 = AB`. Formation fires at
//! `k_formation * [A] * [B]`, dissociation at `k_dissociation * [AB]`.

use crate::process::{Process, ProcessReactor};

/// Molecule counts, `[A, B, AB]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State {
    /// Count per species.
    pub concentrations: [u64; 3],
}

struct Reaction {
    k: f64,
    reactants: Vec<usize>,
    products: Vec<usize>,
}

impl Process<State> for Reaction {
    fn rate(&self, state: &State) -> f64 {
        // e.g. `k[A][B]`, `k[AB]`
        self.reactants
            .iter()
            .fold(self.k, |rate, &index| rate * state.concentrations[index] as f64)
    }

    fn perform(&mut self, state: &mut State) {
        // Positive rate implies every reactant count is at least one.
        for &index in &self.reactants {
            state.concentrations[index] -= 1;
        }
        for &index in &self.products {
            state.concentrations[index] += 1;
        }
    }
}

/// Build the dimerization system from initial `[A, B, AB]` counts.
pub fn create(
    seed: u64,
    k_formation: f64,
    k_dissociation: f64,
    concentrations: [u64; 3],
) -> (ProcessReactor<State>, State) {
    let mut reactor = ProcessReactor::new(seed);
    let state = State { concentrations };

    reactor.add(Reaction {
        k: k_formation,
        reactants: vec![0, 1],
        products: vec![2],
    });
    reactor.add(Reaction {
        k: k_dissociation,
        reactants: vec![2],
        products: vec![0, 1],
    });

    (reactor, state)
}
