//! photometry::uncertainty — planet-radius uncertainty by error propagation.
//!
//! Purpose
//! -------
//! Estimate the 1-sigma uncertainty on the planetary radius implied by a
//! noisy box-shaped transit, using first-order (linearized) propagation of
//! the scatter in the in-transit and out-of-transit flux levels.
//!
//! Key behaviors
//! -------------
//! - Split flux into in-transit samples (timestamps in `[t_start, t_end]`,
//!   bounds inclusive) and the out-of-transit complement.
//! - Summarize each partition by its arithmetic mean and population standard
//!   deviation.
//! - Form the apparent depth `δ = 1 − μ_in / μ_out`, an estimate of
//!   `(R_p / R_s)²`, and reject `δ ≤ 0`.
//! - Propagate the partition scatter through `R_p = R_s √δ`:
//!   - `∂R_p/∂μ_in  = −R_s / (2 √δ μ_out)`
//!   - `∂R_p/∂μ_out =  R_s μ_in / (2 √δ μ_out²)`
//!   - `σ_R = √((∂R_p/∂μ_in · σ_in)² + (∂R_p/∂μ_out · σ_out)²)`
//!
//! Invariants & assumptions
//! ------------------------
//! - The two partition errors are treated as independent (no covariance
//!   term).
//! - Inputs are validated before any statistic is computed (equal lengths,
//!   finite values, `R_s > 0`); both partitions must be non-empty and the
//!   out-of-transit mean must be non-zero.
//! - Pure and deterministic: identical inputs give bit-identical outputs.
//!
//! Conventions
//! -----------
//! - `σ_R` is reported in the unit of `R_s`.
//! - Standard deviations use the population (1 / n) denominator.
//!
//! Downstream usage
//! ----------------
//! - Call [`estimate`] for the scalar uncertainty, or
//!   [`UncertaintyOutcome::estimate`] to also inspect the partition
//!   statistics, the depth, the partial derivatives, and the implied radius.
//! - [`aggregate`](crate::photometry::binning::aggregate) runs the same
//!   computation on a time-binned series.

use ndarray::ArrayView1;
use statrs::statistics::Statistics;

use crate::photometry::{
    errors::{TransitError, TransitResult},
    validation::{validate_series, validate_stellar_radius},
    window::TransitWindow,
};

/// UncertaintyOutcome — full breakdown of one radius-uncertainty estimate.
///
/// Fields
/// ------
/// - `n_in`, `n_out`: sample counts of each partition.
/// - `mean_in`, `std_in`, `mean_out`, `std_out`: partition statistics.
/// - `delta`: apparent depth `1 − mean_in / mean_out`, strictly positive.
/// - `d_mean_in`, `d_mean_out`: partial derivatives of `R_p` with respect to
///   each mean.
/// - `radius`: implied planetary radius `R_s √delta`.
/// - `sigma`: propagated 1-sigma uncertainty on `radius`.
///
/// Invariants
/// ----------
/// - `n_in ≥ 1`, `n_out ≥ 1`, `delta > 0`, `sigma ≥ 0` (or NaN/∞ only if the
///   arithmetic overflows).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UncertaintyOutcome {
    n_in: usize,
    n_out: usize,
    mean_in: f64,
    std_in: f64,
    mean_out: f64,
    std_out: f64,
    delta: f64,
    d_mean_in: f64,
    d_mean_out: f64,
    radius: f64,
    sigma: f64,
}

impl UncertaintyOutcome {
    /// Estimate the planetary radius and its propagated uncertainty.
    ///
    /// Parameters
    /// ----------
    /// - `time`: `ArrayView1<f64>`
    ///   Timestamps in days.
    /// - `window`: [`TransitWindow`]
    ///   Inclusive transit interval.
    /// - `flux`: `ArrayView1<f64>`
    ///   Observed normalized flux, paired with `time`.
    /// - `r_star`: `f64`
    ///   Stellar radius; sets the unit of the result.
    ///
    /// Errors
    /// ------
    /// - `LengthMismatch`, `NonFiniteData`, `InvalidStellarRadius` from input
    ///   validation.
    /// - `EmptyPartition` when no sample is in transit (this includes an
    ///   inverted window) or none is out of transit.
    /// - `ZeroBaseline` when the out-of-transit mean is exactly zero.
    /// - `NonPositiveDepth { delta }` when `delta <= 0`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use transit_photometry::photometry::{TransitWindow, UncertaintyOutcome};
    /// let time = array![0.0, 1.0, 2.0, 3.0, 4.0];
    /// let flux = array![1.0, 0.75, 0.75, 0.75, 1.0];
    /// let window = TransitWindow::new(1.0, 3.0);
    /// let outcome = UncertaintyOutcome::estimate(time.view(), window, flux.view(), 1.0).unwrap();
    /// assert!((outcome.radius() - 0.5).abs() < 1e-12);
    /// assert!(outcome.sigma().abs() < 1e-12);
    /// ```
    pub fn estimate(
        time: ArrayView1<'_, f64>, window: TransitWindow, flux: ArrayView1<'_, f64>, r_star: f64,
    ) -> TransitResult<Self> {
        validate_series(time, flux)?;
        validate_stellar_radius(r_star)?;

        let partition = window.partition(time, flux);
        if partition.flux_in.is_empty() {
            return Err(TransitError::EmptyPartition { partition: "in-transit" });
        }
        if partition.flux_out.is_empty() {
            return Err(TransitError::EmptyPartition { partition: "out-of-transit" });
        }

        let mean_in = partition.flux_in.iter().mean();
        let std_in = partition.flux_in.iter().population_std_dev();
        let mean_out = partition.flux_out.iter().mean();
        let std_out = partition.flux_out.iter().population_std_dev();

        if mean_out == 0.0 {
            return Err(TransitError::ZeroBaseline);
        }

        let delta = 1.0 - mean_in / mean_out;
        if delta <= 0.0 {
            return Err(TransitError::NonPositiveDepth { delta });
        }

        let sqrt_delta = delta.sqrt();
        let d_mean_in = -r_star / (2.0 * sqrt_delta * mean_out);
        let d_mean_out = r_star * mean_in / (2.0 * sqrt_delta * mean_out.powi(2));
        let sigma = ((d_mean_in * std_in).powi(2) + (d_mean_out * std_out).powi(2)).sqrt();

        tracing::debug!(
            n_in = partition.flux_in.len(),
            n_out = partition.flux_out.len(),
            mean_in,
            mean_out,
            delta,
            sigma,
            "propagated planet-radius uncertainty"
        );

        Ok(UncertaintyOutcome {
            n_in: partition.flux_in.len(),
            n_out: partition.flux_out.len(),
            mean_in,
            std_in,
            mean_out,
            std_out,
            delta,
            d_mean_in,
            d_mean_out,
            radius: r_star * sqrt_delta,
            sigma,
        })
    }

    /// Number of in-transit samples.
    pub fn n_in(&self) -> usize {
        self.n_in
    }

    /// Number of out-of-transit samples.
    pub fn n_out(&self) -> usize {
        self.n_out
    }

    /// Mean in-transit flux.
    pub fn mean_in(&self) -> f64 {
        self.mean_in
    }

    /// Population standard deviation of the in-transit flux.
    pub fn std_in(&self) -> f64 {
        self.std_in
    }

    /// Mean out-of-transit flux.
    pub fn mean_out(&self) -> f64 {
        self.mean_out
    }

    /// Population standard deviation of the out-of-transit flux.
    pub fn std_out(&self) -> f64 {
        self.std_out
    }

    /// Apparent depth `1 − mean_in / mean_out`.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// `∂R_p/∂μ_in`.
    pub fn d_mean_in(&self) -> f64 {
        self.d_mean_in
    }

    /// `∂R_p/∂μ_out`.
    pub fn d_mean_out(&self) -> f64 {
        self.d_mean_out
    }

    /// Implied planetary radius `R_s √delta`.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Propagated 1-sigma uncertainty on [`radius`](Self::radius).
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

/// Propagated 1-sigma uncertainty on the planetary radius.
///
/// Scalar form of [`UncertaintyOutcome::estimate`] taking the window bounds
/// directly; see there for the error contract.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use transit_photometry::photometry::{TransitError, estimate};
/// let time = array![0.0, 1.0, 2.0];
/// let flat = array![1.0, 1.0, 1.0];
/// assert!(matches!(
///     estimate(time.view(), 1.0, 1.0, flat.view(), 1.0),
///     Err(TransitError::NonPositiveDepth { .. })
/// ));
/// ```
pub fn estimate(
    time: ArrayView1<'_, f64>, t_start: f64, t_end: f64, flux: ArrayView1<'_, f64>, r_star: f64,
) -> TransitResult<f64> {
    UncertaintyOutcome::estimate(time, TransitWindow::new(t_start, t_end), flux, r_star)
        .map(|outcome| outcome.sigma())
}
