//! Integration tests for the transit photometry pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end flow a caller follows: simulate a light curve,
//!   perturb it with noise, estimate the radius uncertainty on the raw
//!   samples, and again after time-binning.
//! - Use realistic geometry (Sun-like star, Jupiter- and Earth-sized planets)
//!   rather than unit radii only.
//!
//! Coverage
//! --------
//! - `photometry::simulator::simulate` feeding `photometry::uncertainty`.
//! - `photometry::binning::aggregate` and `aggregate_with`.
//! - Error propagation through the public surface.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation branches, covered by unit tests.
//! - Python bindings, which are exercised from Python.
use approx::assert_relative_eq;
use ndarray::Array1;
use transit_photometry::photometry::{
    BinningOptions, TransitError, TransitWindow, UncertaintyOutcome, aggregate, aggregate_with,
    bin_series, estimate, simulate,
};

const R_SUN: f64 = 6.957e8;
const R_JUPITER: f64 = 7.1492e7;
const R_EARTH: f64 = 6.371e6;

/// Deterministic zero-mean-ish perturbation of amplitude `scale`.
///
/// A fixed sequence keeps the tests reproducible without a random number
/// generator.
fn perturb(flux: &Array1<f64>, scale: f64) -> Array1<f64> {
    flux.iter()
        .enumerate()
        .map(|(i, f)| {
            let x = i as f64;
            f + scale * ((x * 12.9898).sin() + 0.5 * (x * 78.233).cos())
        })
        .collect()
}

/// Ten days sampled every 30 minutes, transit between days 4 and 5.
fn observing_grid() -> (Array1<f64>, TransitWindow) {
    (Array1::linspace(0.0, 10.0, 481), TransitWindow::new(4.0, 5.0))
}

#[test]
// Purpose
// -------
// A noisy Jupiter transit recovers a radius close to the truth, with a
// positive, finite uncertainty.
fn noisy_jupiter_transit_recovers_radius_with_positive_uncertainty() {
    // Arrange
    let (time, window) = observing_grid();
    let clean = simulate(time.view(), window.start, window.end, R_SUN, R_JUPITER);
    let noisy = perturb(&clean, 5e-4);

    // Act
    let outcome = UncertaintyOutcome::estimate(time.view(), window, noisy.view(), R_SUN).unwrap();
    let sigma = estimate(time.view(), window.start, window.end, noisy.view(), R_SUN).unwrap();

    // Assert
    assert_eq!(sigma.to_bits(), outcome.sigma().to_bits());
    assert!(sigma.is_finite() && sigma > 0.0);
    assert_relative_eq!(outcome.radius(), R_JUPITER, max_relative = 0.05);
    assert!(sigma < R_JUPITER, "uncertainty should be smaller than the radius itself");
}

#[test]
// Purpose
// -------
// The noiseless simulation round-trips through the estimator: vanishing
// uncertainty and the exact input radius.
fn noiseless_simulation_round_trips_through_estimator() {
    let (time, window) = observing_grid();
    let clean = simulate(time.view(), window.start, window.end, R_SUN, R_EARTH);

    let outcome = UncertaintyOutcome::estimate(time.view(), window, clean.view(), R_SUN).unwrap();

    assert!(outcome.std_in() < 1e-12, "std_in = {}", outcome.std_in());
    assert_eq!(outcome.std_out(), 0.0);
    assert!(outcome.sigma() / R_EARTH < 1e-9, "sigma = {}", outcome.sigma());
    assert_relative_eq!(outcome.radius(), R_EARTH, max_relative = 1e-9);
}

#[test]
// Purpose
// -------
// Binning reduces the series and changes the estimate, while
// `aggregate_with` agrees with the scalar `aggregate`.
fn binning_reduces_points_and_changes_uncertainty() {
    // Arrange
    let (time, window) = observing_grid();
    let clean = simulate(time.view(), window.start, window.end, R_SUN, R_JUPITER);
    let noisy = perturb(&clean, 5e-4);
    let hourly = BinningOptions::new(1.0 / 24.0).unwrap();
    let six_hourly = BinningOptions::new(0.25).unwrap();

    // Act
    let raw = estimate(time.view(), window.start, window.end, noisy.view(), R_SUN).unwrap();
    let reduced = bin_series(time.view(), noisy.view(), &six_hourly).unwrap();
    let outcome = aggregate_with(time.view(), window, noisy.view(), R_SUN, &six_hourly).unwrap();
    let binned =
        aggregate(time.view(), window.start, window.end, noisy.view(), R_SUN, six_hourly.bin_width)
            .unwrap();
    let binned_hourly =
        aggregate(time.view(), window.start, window.end, noisy.view(), R_SUN, hourly.bin_width)
            .unwrap();

    // Assert
    assert!(reduced.len() < time.len());
    assert_eq!(reduced.counts.iter().sum::<usize>(), time.len());
    assert_eq!(outcome.sigma().to_bits(), binned.to_bits());
    assert!(binned.is_finite() && binned_hourly.is_finite());
    assert!((raw - binned).abs() > 0.0);
    assert!((binned - binned_hourly).abs() > 0.0);
}

#[test]
// Purpose
// -------
// A light curve without a dip is rejected by both entry points with the
// depth guard, never with a silent NaN.
fn flat_light_curve_is_rejected_by_both_entry_points() {
    let (time, window) = observing_grid();
    let flat = simulate(time.view(), window.start, window.end, R_SUN, 0.0);

    let direct = estimate(time.view(), window.start, window.end, flat.view(), R_SUN);
    let binned = aggregate(time.view(), window.start, window.end, flat.view(), R_SUN, 1.0);

    assert!(matches!(direct, Err(TransitError::NonPositiveDepth { .. })), "got {direct:?}");
    assert!(matches!(binned, Err(TransitError::NonPositiveDepth { .. })), "got {binned:?}");
}
