//! photometry — box transit light curves and planet-radius uncertainty.
//!
//! Purpose
//! -------
//! Collect the three operations of a simplified transit-photometry exercise
//! together with their shared error type and input guards:
//!
//! - [`simulate`] builds a synthetic box-shaped light curve from a time grid,
//!   a transit window, and the stellar/planetary radii.
//! - [`estimate`] propagates the scatter of the in-transit and out-of-transit
//!   flux into a 1-sigma uncertainty on the planetary radius.
//! - [`aggregate`] averages the light curve into fixed-width time bins and
//!   runs [`estimate`] on the reduced series.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every operation is pure and stateless; nothing is cached between calls.
//! - The transit window is a closed interval: both bounds are in transit.
//! - The simulator never fails. The estimator and the aggregator report
//!   malformed input and a non-positive apparent depth via [`TransitError`].
//!
//! Conventions
//! -----------
//! - Time is in days, flux is normalized to a baseline of 1.0, and radii share
//!   whatever unit the caller chooses (usually metres); the uncertainty is
//!   returned in the unit of `R_star`.
//! - Series are passed as `ndarray` views and returned as owned `Array1`.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use ndarray::Array1;
//! use transit_photometry::photometry::{aggregate, estimate, simulate};
//!
//! let time = Array1::linspace(0.0, 20.0, 81);
//! let clean = simulate(time.view(), 8.0, 12.0, 6.957e8, 6.957e7);
//! let noisy: Array1<f64> =
//!     clean.iter().enumerate().map(|(i, f)| f + 1e-3 * (i as f64).sin()).collect();
//!
//! let sigma = estimate(time.view(), 8.0, 12.0, noisy.view(), 6.957e8)?;
//! let sigma_binned = aggregate(time.view(), 8.0, 12.0, noisy.view(), 6.957e8, 1.0)?;
//! assert!(sigma > 0.0 && sigma_binned >= 0.0);
//! # Ok::<(), transit_photometry::photometry::TransitError>(())
//! ```

pub mod binning;
pub mod errors;
pub mod simulator;
pub mod uncertainty;
pub mod validation;
pub mod window;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::binning::{BinnedSeries, BinningOptions, aggregate, aggregate_with, bin_series};
pub use self::errors::{TransitError, TransitResult};
pub use self::simulator::{simulate, simulate_window, transit_depth};
pub use self::uncertainty::{UncertaintyOutcome, estimate};
pub use self::window::{FluxPartition, TransitWindow};

pub mod prelude {
    pub use super::binning::{BinningOptions, aggregate};
    pub use super::errors::{TransitError, TransitResult};
    pub use super::simulator::simulate;
    pub use super::uncertainty::{UncertaintyOutcome, estimate};
    pub use super::window::TransitWindow;
}
