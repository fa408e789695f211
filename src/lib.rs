//! transit_photometry — exoplanet transit light curves and radius uncertainty.
//!
//! Purpose
//! -------
//! Model the light curve of a star occulted by a transiting planet as a
//! rectangular dip, and estimate the statistical uncertainty on the planetary
//! radius recovered from noisy photometry, optionally after time-binning.
//! When the `python-bindings` feature is enabled, this module also defines
//! the `_transit_photometry` Python extension.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module ([`photometry`]) as the public crate
//!   surface.
//! - Define `#[pyfunction]` wrappers for `simulate`, `estimate`, and
//!   `aggregate` and the `#[pymodule]` initializer that registers them.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in [`photometry`]; this file only converts
//!   Python inputs and maps [`TransitError`](photometry::TransitError) into
//!   `ValueError`.
//! - The Python functions keep the Rust parameter order and units (days for
//!   time, any common unit for radii).
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests under `photometry` and by
//!   the integration test in `tests/`.
//! - The PyO3 layer is exercised from Python.

pub mod photometry;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{photometry::binning::DEFAULT_BIN_WIDTH, utils::{extract_light_curve, extract_series}};

/// Python `simulate(t, t_start, t_end, r_star, r_planet) -> numpy.ndarray`.
///
/// Returns the box-shaped light curve as a new float64 array. Never raises
/// for numeric input.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "simulate")]
#[pyo3(signature = (t, t_start, t_end, r_star, r_planet))]
fn py_simulate<'py>(
    py: Python<'py>, t: &Bound<'py, PyAny>, t_start: f64, t_end: f64, r_star: f64, r_planet: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let t: PyReadonlyArray1<f64> = extract_series(py, t, "t")?;
    let flux = photometry::simulate(t.as_array(), t_start, t_end, r_star, r_planet);
    Ok(flux.into_pyarray(py))
}

/// Python `estimate(time, t_start, t_end, flux, r_star) -> float`.
///
/// Raises `ValueError` when the apparent depth is not positive or the input
/// is malformed.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "estimate")]
#[pyo3(signature = (time, t_start, t_end, flux, r_star))]
fn py_estimate<'py>(
    py: Python<'py>, time: &Bound<'py, PyAny>, t_start: f64, t_end: f64,
    flux: &Bound<'py, PyAny>, r_star: f64,
) -> PyResult<f64> {
    let (time, flux) = extract_light_curve(py, time, flux)?;
    Ok(photometry::estimate(time.as_array(), t_start, t_end, flux.as_array(), r_star)?)
}

/// Python `aggregate(time, t_start, t_end, flux, r_star, bin_width=1.0) -> float`.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "aggregate")]
#[pyo3(signature = (time, t_start, t_end, flux, r_star, bin_width = DEFAULT_BIN_WIDTH))]
fn py_aggregate<'py>(
    py: Python<'py>, time: &Bound<'py, PyAny>, t_start: f64, t_end: f64,
    flux: &Bound<'py, PyAny>, r_star: f64, bin_width: f64,
) -> PyResult<f64> {
    let (time, flux) = extract_light_curve(py, time, flux)?;
    Ok(photometry::aggregate(time.as_array(), t_start, t_end, flux.as_array(), r_star, bin_width)?)
}

/// Initialize the `_transit_photometry` extension module.
///
/// Invoked by Python on import; registers the three photometry functions at
/// module level.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _transit_photometry(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_simulate, m)?)?;
    m.add_function(wrap_pyfunction!(py_estimate, m)?)?;
    m.add_function(wrap_pyfunction!(py_aggregate, m)?)?;
    Ok(())
}
