//! Constant-rate processes that only count their own firings.
//!
//! Handy for checking selection statistics: after many steps the
//! tallies should be proportional to the configured rates.

use crate::process::{Process, ProcessReactor};

/// Per-process firing counts, indexed like the `rates` passed to
/// [`create`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
    /// How many times each process has fired.
    pub counts: Vec<u64>,
}

struct IncrementingProcess {
    rate: f64,
    index: usize,
}

impl Process<State> for IncrementingProcess {
    fn rate(&self, _: &State) -> f64 {
        self.rate
    }

    fn perform(&mut self, state: &mut State) {
        state.counts[self.index] += 1;
    }
}

/// Build a reactor with one constant process per entry of `rates`.
pub fn create(seed: u64, rates: &[f64]) -> (ProcessReactor<State>, State) {
    let mut reactor = ProcessReactor::new(seed);
    let state = State {
        counts: vec![0; rates.len()],
    };
    for (index, &rate) in rates.iter().enumerate() {
        reactor.add(IncrementingProcess { rate, index });
    }
    (reactor, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_core::StepError;
    use drift_test_utils::stats::{chi_squared, chi_squared_critical};

    #[test]
    fn tallies_follow_rates() {
        let rates = [0.13, 9.58, 2.25, 0.0];
        let total: f64 = rates.iter().sum();
        let (mut reactor, mut state) = create(42, &rates);
        let n = 30_000u64;
        reactor.multistep(&mut state, n).unwrap();

        assert_eq!(state.counts.iter().sum::<u64>(), n);
        assert_eq!(state.counts[3], 0);

        let observed: Vec<usize> = state.counts[..3].iter().map(|&c| c as usize).collect();
        let expected: Vec<f64> = rates[..3].iter().map(|r| r / total * n as f64).collect();
        let stat = chi_squared(&observed, &expected);
        assert!(stat < chi_squared_critical(2), "chi-squared {stat}");
    }

    #[test]
    fn all_zero_rates_is_degenerate() {
        let (mut reactor, mut state) = create(0, &[0.0, 0.0]);
        assert_eq!(reactor.step(&mut state), Err(StepError::DegenerateState));
        assert_eq!(state.counts, vec![0, 0]);
    }
}
