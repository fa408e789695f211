//! photometry::errors — error type for transit photometry routines.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the transit simulator,
//! the radius-uncertainty estimator, and the binning aggregator, together
//! with a conversion to Python exceptions for the PyO3 bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`TransitResult`] and [`TransitError`] as the canonical result
//!   and error types for every fallible photometry operation.
//! - Attach human-readable `Display` messages that embed the offending value
//!   (computed depth, bin width, index of a bad sample, ...).
//! - Implement `From<TransitError> for PyErr` so that Python callers see a
//!   `ValueError` carrying the Rust message verbatim.
//!
//! Invariants & assumptions
//! ------------------------
//! - The simulator is infallible and never produces a [`TransitError`]; only
//!   the estimator and the aggregator return [`TransitResult<T>`].
//! - `NonPositiveDepth` is the physical guard of the estimator: it is emitted
//!   whenever the apparent depth `delta = 1 - mean_in / mean_out` is not
//!   strictly positive (including NaN).
//! - The remaining variants are input guards checked before any statistic is
//!   computed.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message is non-empty and
//!   embeds its payload.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type TransitResult<T> = Result<T, TransitError>;

/// TransitError — failure conditions for transit photometry estimates.
///
/// Variants
/// --------
/// - `EmptySeries`
///   The time series handed to the binning step has no samples, so the bin
///   range `[min(time), max(time) + bin_width)` is undefined.
/// - `LengthMismatch { time, flux }`
///   The paired time and flux series differ in length.
/// - `NonFiniteData { series, index, value }`
///   A time or flux sample is NaN or ±∞.
/// - `InvalidStellarRadius { value }`
///   The stellar radius is not finite or not strictly positive.
/// - `InvalidBinWidth { value }`
///   The bin width is not finite or not strictly positive.
/// - `EmptyPartition { partition }`
///   No sample falls inside (or outside) the transit window, so the mean and
///   standard deviation of that partition are undefined. An inverted window
///   (`t_start > t_end`) always ends here.
/// - `ZeroBaseline`
///   The out-of-transit mean flux is exactly zero and the depth ratio
///   `mean_in / mean_out` is undefined.
/// - `NonPositiveDepth { delta }`
///   The apparent depth is `<= 0` (no dimming or net brightening), so
///   `R_star * sqrt(delta)` has no real value.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitError {
    // ---- Input validation ----
    EmptySeries,
    LengthMismatch { time: usize, flux: usize },
    NonFiniteData { series: &'static str, index: usize, value: f64 },
    InvalidStellarRadius { value: f64 },
    InvalidBinWidth { value: f64 },

    // ---- Estimation ----
    EmptyPartition { partition: &'static str },
    ZeroBaseline,
    NonPositiveDepth { delta: f64 },
}

impl std::error::Error for TransitError {}

impl std::fmt::Display for TransitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitError::EmptySeries => {
                write!(f, "Time series is empty; at least one sample is required to build bins.")
            }
            TransitError::LengthMismatch { time, flux } => {
                write!(f, "Time series has {time} samples but flux series has {flux}.")
            }
            TransitError::NonFiniteData { series, index, value } => {
                write!(
                    f,
                    "Invalid {series} value {value} at index {index}. Must be a finite number."
                )
            }
            TransitError::InvalidStellarRadius { value } => {
                write!(f, "Invalid stellar radius: {value}. Must be finite and > 0.")
            }
            TransitError::InvalidBinWidth { value } => {
                write!(f, "Invalid bin width: {value}. Must be finite and > 0.")
            }
            TransitError::EmptyPartition { partition } => {
                write!(f, "No {partition} samples; cannot compute flux statistics.")
            }
            TransitError::ZeroBaseline => {
                write!(f, "Out-of-transit mean flux is zero; transit depth is undefined.")
            }
            TransitError::NonPositiveDepth { delta } => {
                write!(f, "Invalid difference between mean fluxes: delta = {delta} (must be > 0).")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<TransitError> for PyErr {
    fn from(err: TransitError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
