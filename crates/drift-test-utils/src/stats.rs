//! Goodness-of-fit statistics for seeded sampling tests.

/// Pearson's chi-squared statistic for observed counts against
/// expected (fractional) counts. Categories with zero expectation are
/// skipped.
pub fn chi_squared(observed: &[usize], expected: &[f64]) -> f64 {
    assert_eq!(
        observed.len(),
        expected.len(),
        "observed and expected must have the same number of categories"
    );
    observed
        .iter()
        .zip(expected)
        .filter(|(_, &e)| e > 0.0)
        .map(|(&o, &e)| {
            let diff = o as f64 - e;
            diff * diff / e
        })
        .sum()
}

/// Upper critical value of the chi-squared distribution at
/// significance 0.001 for `df` degrees of freedom (1..=10).
pub fn chi_squared_critical(df: usize) -> f64 {
    const TABLE: [f64; 10] = [
        10.828, 13.816, 16.266, 18.467, 20.515, 22.458, 24.322, 26.124, 27.877, 29.588,
    ];
    assert!((1..=TABLE.len()).contains(&df), "df {df} not tabulated");
    TABLE[df - 1]
}

/// One-sample Kolmogorov-Smirnov statistic `D` of `samples` against
/// the continuous CDF `cdf`.
pub fn ks_statistic(mut samples: Vec<f64>, cdf: impl Fn(f64) -> f64) -> f64 {
    assert!(!samples.is_empty(), "need at least one sample");
    samples.sort_by(f64::total_cmp);
    let n = samples.len() as f64;
    samples
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let f = cdf(x);
            let below = f - i as f64 / n;
            let above = (i + 1) as f64 / n - f;
            below.max(above)
        })
        .fold(0.0, f64::max)
}
