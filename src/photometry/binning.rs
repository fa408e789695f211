//! photometry::binning — fixed-width time binning ahead of the estimator.
//!
//! Purpose
//! -------
//! Reduce a noisy light curve to one averaged `(time, flux)` point per
//! fixed-width time bin, then run the radius-uncertainty estimate on the
//! reduced series. Binning trades time resolution for lower per-point noise,
//! so the resulting uncertainty generally differs from the unbinned one.
//!
//! Key behaviors
//! -------------
//! - Bins are half-open, `[t_min + k·w, t_min + (k+1)·w)`, and a sample is
//!   assigned to bin `k = ⌊(t − t_min) / w⌋`. A sample on an edge belongs to
//!   the bin starting at that edge, and `max(time)` always falls inside the
//!   last bin.
//! - Each populated bin contributes the mean of its timestamps and the mean of
//!   its flux values; empty bins contribute nothing.
//! - The reduced series is ordered by bin index, i.e. by time.
//! - [`aggregate`] forwards the window and `R_s` unchanged to
//!   [`UncertaintyOutcome::estimate`].
//!
//! Invariants & assumptions
//! ------------------------
//! - The input series must be non-empty, equal in length, and finite; the bin
//!   width must be finite and strictly positive.
//! - Time is not required to be sorted: grouping is by bin index, not by
//!   position.
//! - Memory is proportional to the number of populated bins, independent of
//!   the ratio between the time span and the bin width.
//!
//! Testing notes
//! -------------
//! - Unit tests cover edge assignment, skipped empty bins, a hand-computed
//!   aggregate, widths equal to and wider than the span, an overflowing bin
//!   index, and a check that the bin width changes the estimate.

use std::collections::BTreeMap;

use ndarray::{Array1, ArrayView1};

use crate::photometry::{
    errors::{TransitError, TransitResult},
    uncertainty::UncertaintyOutcome,
    validation::{validate_bin_width, validate_series},
    window::TransitWindow,
};

/// Default bin width in days.
pub const DEFAULT_BIN_WIDTH: f64 = 1.0;

/// BinningOptions — configuration of the time-binning step.
///
/// Fields
/// ------
/// - `bin_width`: `f64`
///   Width of each bin in days; finite and strictly positive.
///
/// Notes
/// -----
/// - `Default` yields a one-day bin, matching [`DEFAULT_BIN_WIDTH`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BinningOptions {
    pub bin_width: f64,
}

impl BinningOptions {
    /// Construct validated binning options.
    ///
    /// Errors
    /// ------
    /// - `TransitError::InvalidBinWidth` if `bin_width` is not finite or
    ///   `<= 0`.
    pub fn new(bin_width: f64) -> TransitResult<Self> {
        validate_bin_width(bin_width)?;
        Ok(BinningOptions { bin_width })
    }
}

impl Default for BinningOptions {
    fn default() -> Self {
        BinningOptions { bin_width: DEFAULT_BIN_WIDTH }
    }
}

/// BinnedSeries — reduced light curve, one point per populated bin.
///
/// Fields
/// ------
/// - `time`: mean timestamp of each populated bin.
/// - `flux`: mean flux of each populated bin.
/// - `counts`: number of input samples averaged into each point.
///
/// Invariants
/// ----------
/// - All three have the same length and are ordered by bin index.
/// - Every entry of `counts` is `>= 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinnedSeries {
    pub time: Array1<f64>,
    pub flux: Array1<f64>,
    pub counts: Vec<usize>,
}

impl BinnedSeries {
    /// Number of populated bins.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

#[derive(Debug, Default)]
struct BinAccumulator {
    sum_time: f64,
    sum_flux: f64,
    count: usize,
}

/// Average a paired time/flux series into fixed-width time bins.
///
/// Parameters
/// ----------
/// - `time`: `ArrayView1<f64>`
///   Timestamps in days; must be non-empty.
/// - `flux`: `ArrayView1<f64>`
///   Flux values paired with `time`.
/// - `opts`: `&BinningOptions`
///   Bin width.
///
/// Returns
/// -------
/// `TransitResult<BinnedSeries>`
///   One averaged point per populated bin, ordered by time.
///
/// Errors
/// ------
/// - `LengthMismatch`, `NonFiniteData` from series validation.
/// - `EmptySeries` when `time` has no samples.
/// - `InvalidBinWidth` when `opts.bin_width` is not finite or `<= 0`, or so
///   small relative to the time span that a bin index would overflow `usize`.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use transit_photometry::photometry::binning::{BinningOptions, bin_series};
/// let time = array![0.0, 0.5, 1.0, 3.2];
/// let flux = array![1.0, 0.8, 0.9, 1.0];
/// let binned = bin_series(time.view(), flux.view(), &BinningOptions::default()).unwrap();
/// assert_eq!(binned.counts, vec![2, 1, 1]);
/// assert_eq!(binned.time.to_vec(), vec![0.25, 1.0, 3.2]);
/// ```
pub fn bin_series(
    time: ArrayView1<'_, f64>, flux: ArrayView1<'_, f64>, opts: &BinningOptions,
) -> TransitResult<BinnedSeries> {
    validate_series(time, flux)?;
    validate_bin_width(opts.bin_width)?;
    if time.is_empty() {
        return Err(TransitError::EmptySeries);
    }

    let t_min = time.iter().copied().fold(f64::INFINITY, f64::min);
    let t_max = time.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let last_index = ((t_max - t_min) / opts.bin_width).floor();
    if !last_index.is_finite() || last_index >= usize::MAX as f64 {
        return Err(TransitError::InvalidBinWidth { value: opts.bin_width });
    }

    let mut bins: BTreeMap<usize, BinAccumulator> = BTreeMap::new();
    for (&t, &f) in time.iter().zip(flux.iter()) {
        let index = ((t - t_min) / opts.bin_width).floor() as usize;
        let bin = bins.entry(index).or_default();
        bin.sum_time += t;
        bin.sum_flux += f;
        bin.count += 1;
    }

    let mut binned_time = Vec::with_capacity(bins.len());
    let mut binned_flux = Vec::with_capacity(bins.len());
    let mut counts = Vec::with_capacity(bins.len());
    for bin in bins.values() {
        let n = bin.count as f64;
        binned_time.push(bin.sum_time / n);
        binned_flux.push(bin.sum_flux / n);
        counts.push(bin.count);
    }

    tracing::trace!(
        samples = time.len(),
        populated_bins = counts.len(),
        bin_width = opts.bin_width,
        "binned light curve"
    );

    Ok(BinnedSeries { time: Array1::from(binned_time), flux: Array1::from(binned_flux), counts })
}

/// Bin the series, then estimate the radius uncertainty on the reduced data.
///
/// Returns the full [`UncertaintyOutcome`]; the statistics it carries are
/// those of the binned points, not of the raw samples.
pub fn aggregate_with(
    time: ArrayView1<'_, f64>, window: TransitWindow, flux: ArrayView1<'_, f64>, r_star: f64,
    opts: &BinningOptions,
) -> TransitResult<UncertaintyOutcome> {
    let binned = bin_series(time, flux, opts)?;
    UncertaintyOutcome::estimate(binned.time.view(), window, binned.flux.view(), r_star)
}

/// Propagated radius uncertainty after averaging into `bin_width`-day bins.
///
/// Parameters
/// ----------
/// - `time`, `flux`: paired series; `time` must be non-empty.
/// - `t_start`, `t_end`: inclusive transit bounds, applied to the mean time
///   of each bin.
/// - `r_star`: stellar radius; sets the unit of the result.
/// - `bin_width`: bin width in days ([`DEFAULT_BIN_WIDTH`] is the customary
///   choice).
///
/// Errors
/// ------
/// - Everything [`bin_series`] returns.
/// - Everything [`UncertaintyOutcome::estimate`] returns on the binned series,
///   including `NonPositiveDepth` and `EmptyPartition` (e.g. when a bin
///   wider than the whole span collapses the curve to a single point).
pub fn aggregate(
    time: ArrayView1<'_, f64>, t_start: f64, t_end: f64, flux: ArrayView1<'_, f64>, r_star: f64,
    bin_width: f64,
) -> TransitResult<f64> {
    let opts = BinningOptions::new(bin_width)?;
    aggregate_with(time, TransitWindow::new(t_start, t_end), flux, r_star, &opts)
        .map(|outcome| outcome.sigma())
}
