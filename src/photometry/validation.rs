//! photometry::validation — shared input guards for photometry estimates.
//!
//! Purpose
//! -------
//! Centralize the precondition checks performed by the radius-uncertainty
//! estimator and the binning aggregator, so that both report malformed input
//! through the same [`TransitError`] variants.
//!
//! Invariants & assumptions
//! ------------------------
//! - Paired series must have equal lengths and contain only finite values.
//! - The stellar radius and the bin width must be finite and strictly
//!   positive.
//! - Monotonic time is assumed by callers but never checked here.
//! - The transit window is not validated: an inverted window is reported
//!   later as an empty in-transit partition.
//!
//! Conventions
//! -----------
//! - Guards return the first violation found, scanning `time` before `flux`.
//! - No allocation beyond the error value itself.

use ndarray::ArrayView1;

use crate::photometry::errors::{TransitError, TransitResult};

/// Validate a paired time/flux series.
///
/// Parameters
/// ----------
/// - `time`: `ArrayView1<f64>`
///   Timestamps in days.
/// - `flux`: `ArrayView1<f64>`
///   Normalized flux, one value per timestamp.
///
/// Returns
/// -------
/// `TransitResult<()>`
///   `Ok(())` when both series have the same length and only finite values.
///
/// Errors
/// ------
/// - `TransitError::LengthMismatch` when the lengths differ.
/// - `TransitError::NonFiniteData` for the first NaN/±∞ sample, naming the
///   series (`"time"` or `"flux"`) and its index.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use transit_photometry::photometry::validation::validate_series;
/// let time = array![0.0, 1.0, 2.0];
/// let flux = array![1.0, 0.99, 1.0];
/// assert!(validate_series(time.view(), flux.view()).is_ok());
/// ```
pub fn validate_series(
    time: ArrayView1<'_, f64>, flux: ArrayView1<'_, f64>,
) -> TransitResult<()> {
    if time.len() != flux.len() {
        return Err(TransitError::LengthMismatch { time: time.len(), flux: flux.len() });
    }
    check_finite("time", time)?;
    check_finite("flux", flux)
}

/// Validate that the stellar radius is finite and strictly positive.
pub fn validate_stellar_radius(r_star: f64) -> TransitResult<()> {
    if !r_star.is_finite() || r_star <= 0.0 {
        return Err(TransitError::InvalidStellarRadius { value: r_star });
    }
    Ok(())
}

/// Validate that a bin width is finite and strictly positive.
pub fn validate_bin_width(bin_width: f64) -> TransitResult<()> {
    if !bin_width.is_finite() || bin_width <= 0.0 {
        return Err(TransitError::InvalidBinWidth { value: bin_width });
    }
    Ok(())
}

fn check_finite(series: &'static str, values: ArrayView1<'_, f64>) -> TransitResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(TransitError::NonFiniteData { series, index, value: values[index] }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover every error branch of the guards in this module and
    // one success path for each.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that a well-formed pair of series passes validation.
    fn validate_series_accepts_equal_length_finite_series() {
        // Arrange
        let time = array![0.0, 0.5, 1.0];
        let flux = array![1.0, 0.98, 1.0];

        // Act
        let result = validate_series(time.view(), flux.view());

        // Assert
        assert!(result.is_ok(), "Expected Ok(()) for valid inputs, got {result:?}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure that series of different lengths are rejected with both lengths
    // in the payload.
    fn validate_series_rejects_length_mismatch() {
        let time = array![0.0, 1.0, 2.0];
        let flux = array![1.0, 1.0];

        let result = validate_series(time.view(), flux.view());

        assert_eq!(result, Err(TransitError::LengthMismatch { time: 3, flux: 2 }));
    }

    #[test]
    // Purpose
    // -------
    // Ensure that a non-finite timestamp is reported against the time series.
    //
    // Given
    // -----
    // - A time series with +∞ at index 1.
    //
    // Expect
    // ------
    // - `NonFiniteData { series: "time", index: 1, .. }`.
    fn validate_series_rejects_non_finite_time() {
        let time = array![0.0, f64::INFINITY, 2.0];
        let flux = array![1.0, 1.0, 1.0];

        match validate_series(time.view(), flux.view()) {
            Err(TransitError::NonFiniteData { series: "time", index: 1, .. }) => (),
            other => panic!("expected NonFiniteData on time, got {other:?}"),
        }
    }

    #[test]
    fn validate_series_rejects_nan_flux() {
        let time = array![0.0, 1.0, 2.0];
        let flux = array![1.0, 1.0, f64::NAN];

        match validate_series(time.view(), flux.view()) {
            Err(TransitError::NonFiniteData { series: "flux", index: 2, value }) => {
                assert!(value.is_nan())
            }
            other => panic!("expected NonFiniteData on flux, got {other:?}"),
        }
    }

    #[test]
    fn validate_stellar_radius_rejects_non_positive_and_non_finite() {
        assert!(validate_stellar_radius(6.957e8).is_ok());
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = validate_stellar_radius(bad);
            assert!(
                matches!(result, Err(TransitError::InvalidStellarRadius { .. })),
                "expected InvalidStellarRadius for {bad}, got {result:?}"
            );
        }
    }

    #[test]
    fn validate_bin_width_rejects_non_positive_and_non_finite() {
        assert!(validate_bin_width(0.25).is_ok());
        for bad in [0.0, -2.0, f64::NAN, f64::NEG_INFINITY] {
            assert!(
                matches!(validate_bin_width(bad), Err(TransitError::InvalidBinWidth { .. })),
                "expected InvalidBinWidth for {bad}"
            );
        }
    }
}
