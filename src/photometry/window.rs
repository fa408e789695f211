//! photometry::window — the transit window and the in/out-of-transit split.
//!
//! Purpose
//! -------
//! Represent the closed time interval during which the planet occults the
//! star and split a flux series into its in-transit and out-of-transit
//! samples.
//!
//! Invariants & assumptions
//! ------------------------
//! - Both bounds are inclusive: `t` is in transit iff `start <= t <= end`.
//! - `start <= end` is not enforced. An inverted window contains no
//!   timestamp, so every sample lands in the out-of-transit partition.
//! - NaN timestamps are never in transit (both comparisons are false).

use ndarray::ArrayView1;

/// TransitWindow — closed interval `[start, end]` in days.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransitWindow {
    /// First instant of the transit (inclusive).
    pub start: f64,
    /// Last instant of the transit (inclusive).
    pub end: f64,
}

impl TransitWindow {
    /// Build a window from its bounds without validation.
    pub fn new(start: f64, end: f64) -> Self {
        TransitWindow { start, end }
    }

    /// Inclusive membership test.
    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.start && t <= self.end
    }

    /// Split `flux` by the membership of the matching timestamp.
    ///
    /// Parameters
    /// ----------
    /// - `time`: `ArrayView1<f64>`
    ///   Timestamps in days.
    /// - `flux`: `ArrayView1<f64>`
    ///   Flux values paired element-wise with `time`.
    ///
    /// Returns
    /// -------
    /// `FluxPartition`
    ///   In-transit samples and their complement, each in input order.
    ///
    /// Panics
    /// ------
    /// - Never panics. Pairs are formed with `zip`, so a longer series is
    ///   silently truncated; public entry points validate lengths first.
    pub fn partition(
        &self, time: ArrayView1<'_, f64>, flux: ArrayView1<'_, f64>,
    ) -> FluxPartition {
        let mut flux_in = Vec::new();
        let mut flux_out = Vec::with_capacity(flux.len());
        for (&t, &f) in time.iter().zip(flux.iter()) {
            if self.contains(t) {
                flux_in.push(f);
            } else {
                flux_out.push(f);
            }
        }
        FluxPartition { flux_in, flux_out }
    }
}

/// FluxPartition — flux samples inside and outside the transit window.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FluxPartition {
    pub flux_in: Vec<f64>,
    pub flux_out: Vec<f64>,
}
