//! The Gillespie sampling kernel.
//!
//! Two draws per event:
//! - **which**: roulette-wheel selection weighted by `rate / total`
//! - **when**: an Exponential(`total`) waiting time by inverse CDF
//!
//! Both refuse to run on a total propensity that is zero
//! ([`StepError::DegenerateState`]) or not finite
//! ([`StepError::NonFinitePropensity`]), and the waiting time is checked
//! after the division, so NaN or infinity never reaches simulation state.

use drift_core::StepError;
use rand::distr::Open01;
use rand::Rng;

/// Classify `total` as a total propensity.
///
/// Zero (or negative) means no event can fire; NaN or infinity means the
/// rates overflowed.
pub fn check_total(total: f64) -> Result<(), StepError> {
    if !total.is_finite() {
        return Err(StepError::NonFinitePropensity);
    }
    if total > 0.0 {
        Ok(())
    } else {
        Err(StepError::DegenerateState)
    }
}

/// Whether `total` is a usable total propensity.
#[inline]
pub fn is_live(total: f64) -> bool {
    check_total(total).is_ok()
}

/// Sample the waiting time until the next event.
///
/// Draws `u` from the open interval `(0, 1)` so `ln(u)` is always
/// finite, and returns `-ln(u) / total`. A subnormal `total` can push the
/// quotient past `f64::MAX`; that is reported as
/// [`StepError::NonFiniteWaitingTime`].
pub fn sample_waiting_time<R: Rng + ?Sized>(total: f64, rng: &mut R) -> Result<f64, StepError> {
    check_total(total)?;
    let u: f64 = rng.sample(Open01);
    let dt = -u.ln() / total;
    if dt.is_finite() {
        Ok(dt)
    } else {
        Err(StepError::NonFiniteWaitingTime)
    }
}

/// Select an index from `rates`, weighted by each rate's share of `total`.
///
/// Draws `target = u * total` with `u` in `[0, 1)`, then scans the rates
/// subtracting each one until `target < rate`. Rates that are not
/// strictly positive are never selected. If round-off leaves a sliver
/// of `target` after the scan, the last positive-rate entry is chosen.
///
/// `total` must be the sum of `rates`; it is taken as an argument so
/// callers that already summed the table don't pay for it twice.
pub fn select_weighted<I, R>(rates: I, total: f64, rng: &mut R) -> Result<usize, StepError>
where
    I: IntoIterator<Item = f64>,
    R: Rng + ?Sized,
{
    check_total(total)?;
    let mut target = rng.random::<f64>() * total;
    let mut fallback = None;
    for (index, rate) in rates.into_iter().enumerate() {
        // Also skips NaN.
        if !(rate > 0.0) {
            continue;
        }
        if target < rate {
            return Ok(index);
        }
        target -= rate;
        fallback = Some(index);
    }
    fallback.ok_or(StepError::DegenerateState)
}
