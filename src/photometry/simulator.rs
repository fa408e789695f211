//! photometry::simulator — synthetic box-shaped transit light curves.
//!
//! Purpose
//! -------
//! Produce the normalized flux a distant observer would record while an
//! opaque planet crosses its host star, under the simplest possible model: a
//! rectangular dip with no ingress, egress, or limb darkening.
//!
//! Key behaviors
//! -------------
//! - Out of transit the flux is exactly `1.0`.
//! - In transit the flux is exactly `1.0 * (1 - (R_planet / R_star)²)`.
//! - Output length and order match the input timestamps.
//!
//! Invariants & assumptions
//! ------------------------
//! - Infallible: no input is rejected. `R_planet > R_star` yields a negative
//!   depth (the curve brightens) and an empty time grid yields an empty
//!   light curve.
//! - Only the radius ratio matters; both radii must share a unit.
//!
//! Downstream usage
//! ----------------
//! - Callers typically add observational noise to the result before passing
//!   it to [`estimate`](crate::photometry::uncertainty::estimate) or
//!   [`aggregate`](crate::photometry::binning::aggregate).

use ndarray::{Array1, ArrayView1};

use crate::photometry::window::TransitWindow;

/// Normalized out-of-transit flux.
pub const BASELINE_FLUX: f64 = 1.0;

/// Fractional flux drop `(R_planet / R_star)²` of an opaque disk.
#[inline]
pub fn transit_depth(r_star: f64, r_planet: f64) -> f64 {
    (r_planet / r_star).powi(2)
}

/// Simulate a box-shaped transit light curve.
///
/// Parameters
/// ----------
/// - `t`: `ArrayView1<f64>`
///   Timestamps in days; any length, including zero.
/// - `t_start`, `t_end`: `f64`
///   Inclusive transit bounds in days.
/// - `r_star`, `r_planet`: `f64`
///   Stellar and planetary radii in the same unit.
///
/// Returns
/// -------
/// `Array1<f64>`
///   One flux value per timestamp, each equal to either [`BASELINE_FLUX`] or
///   the in-transit level.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use transit_photometry::photometry::simulator::simulate;
/// let t = array![0.0, 1.0, 2.0, 3.0, 4.0];
/// let flux = simulate(t.view(), 1.0, 3.0, 1.0, 0.5);
/// assert_eq!(flux.to_vec(), vec![1.0, 0.75, 0.75, 0.75, 1.0]);
/// ```
pub fn simulate(
    t: ArrayView1<'_, f64>, t_start: f64, t_end: f64, r_star: f64, r_planet: f64,
) -> Array1<f64> {
    simulate_window(t, TransitWindow::new(t_start, t_end), r_star, r_planet)
}

/// Typed form of [`simulate`] taking a [`TransitWindow`].
pub fn simulate_window(
    t: ArrayView1<'_, f64>, window: TransitWindow, r_star: f64, r_planet: f64,
) -> Array1<f64> {
    let in_transit = BASELINE_FLUX * (1.0 - transit_depth(r_star, r_planet));
    t.mapv(|ti| if window.contains(ti) { in_transit } else { BASELINE_FLUX })
}
