//! utils — conversion helpers for the PyO3 bindings.
//!
//! Only compiled with the `python-bindings` feature. Native Rust callers pass
//! `ndarray` views directly and never need anything from here.

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArrayMethods, PyReadonlyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::photometry::validation::validate_series;

/// Borrow a 1-D float64 series from a NumPy array, a pandas Series, or any
/// sequence of floats.
///
/// Any `float64` ndarray is borrowed as-is, strided views included, since the
/// photometry routines only read through `ArrayView1`. Other inputs go
/// through `to_numpy()` or are extracted as a `Vec<f64>` and copied. `name`
/// is the Python argument name used in the `TypeError` message.
#[cfg(feature = "python-bindings")]
pub fn extract_series<'py>(
    py: Python<'py>, raw: &Bound<'py, PyAny>, name: &str,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr) = raw.extract::<PyReadonlyArray1<f64>>() {
        return Ok(arr);
    }

    // pandas.Series
    if let Ok(series) =
        raw.call_method0("to_numpy").and_then(|obj| obj.extract::<PyReadonlyArray1<f64>>())
    {
        return Ok(series);
    }

    let values: Vec<f64> = raw.extract().map_err(|_| {
        PyTypeError::new_err(format!(
            "{name} must be a 1-D float64 light-curve series (numpy.ndarray, pandas.Series, \
             or sequence of floats)"
        ))
    })?;
    Ok(values.into_pyarray(py).readonly())
}

/// Borrow a paired `(time, flux)` light curve and check it before any
/// statistic runs.
///
/// Length mismatches and non-finite samples surface as `ValueError` through
/// `From<TransitError> for PyErr`, with the same message the Rust API gives.
#[cfg(feature = "python-bindings")]
pub fn extract_light_curve<'py>(
    py: Python<'py>, time: &Bound<'py, PyAny>, flux: &Bound<'py, PyAny>,
) -> PyResult<(PyReadonlyArray1<'py, f64>, PyReadonlyArray1<'py, f64>)> {
    let time = extract_series(py, time, "time")?;
    let flux = extract_series(py, flux, "flux")?;
    validate_series(time.as_array(), flux.as_array())?;
    Ok((time, flux))
}
