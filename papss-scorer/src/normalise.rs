//! Normalisation helpers for derived sub-scores.

use papss_core::{Rating, SCORE_MAX};

/// Unit-scale value assigned to every member of a flat distribution.
pub const FLAT_UNIT: f64 = 0.5;

/// Min–max scale `values` into `0.0..=1.0`.
///
/// When every value is identical the result is [`FLAT_UNIT`] for all of
/// them. Any further min–max normalisation must go through this helper so
/// the flat-distribution policy stays uniform.
///
/// # Examples
/// ```
/// use papss_scorer::normalise::scale_unit;
///
/// assert_eq!(scale_unit(&[2.0, 4.0, 6.0]), vec![0.0, 0.5, 1.0]);
/// assert_eq!(scale_unit(&[3.0, 3.0]), vec![0.5, 0.5]);
/// assert!(scale_unit(&[]).is_empty());
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "min-max scaling divides by the observed range"
)]
#[must_use]
pub fn scale_unit(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == min {
        return vec![FLAT_UNIT; values.len()];
    }
    let range = max - min;
    values.iter().map(|value| (value - min) / range).collect()
}

/// Affordability scores on `0.0..=10.0`, cheapest survivor highest.
///
/// A flat price distribution scores every town `5.0`.
#[expect(
    clippy::float_arithmetic,
    reason = "affordability inverts the unit scale onto ten points"
)]
#[must_use]
pub fn affordability_scores(prices_per_area: &[f64]) -> Vec<f64> {
    scale_unit(prices_per_area)
        .into_iter()
        .map(|unit| (1.0 - unit) * SCORE_MAX)
        .collect()
}

/// Quietness on `0.0..=10.0` as a fixed inversion of the noise rating.
///
/// Unlike [`affordability_scores`] this ignores the other survivors.
#[must_use]
pub fn quiet_score(noise: Rating) -> f64 {
    noise.inverted().as_f64().clamp(0.0, SCORE_MAX)
}

/// Round to two decimal places.
#[expect(
    clippy::float_arithmetic,
    reason = "rounding scales by a power of ten"
)]
#[must_use]
pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
