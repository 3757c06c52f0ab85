//! Core simulation types: timing parameters, time grid, and curve container.

use std::ops::Range;

/// Centralized timing parameters.
///
/// The generator and the analysis stages reference this struct for grid
/// geometry, eliminating duplicated sample-count arithmetic.
///
/// # Examples
///
/// ```
/// use eaf_sim::sim::types::SimParams;
///
/// let p = SimParams::new(30, 5, 4);
/// assert_eq!(p.total_samples(), 140);
/// assert_eq!(p.live_end(), 120);
/// ```
#[derive(Debug, Clone)]
pub struct SimParams {
    /// Live simulation window in minutes.
    pub duration_min: usize,
    /// Prediction horizon appended after the live window, in minutes.
    pub prediction_min: usize,
    /// Samples per simulated minute.
    pub samples_per_min: usize,
}

impl SimParams {
    /// Creates new timing parameters.
    ///
    /// # Panics
    ///
    /// Panics if `duration_min` or `samples_per_min` is zero.
    pub fn new(duration_min: usize, prediction_min: usize, samples_per_min: usize) -> Self {
        assert!(duration_min > 0, "duration_min must be > 0");
        assert!(samples_per_min > 0, "samples_per_min must be > 0");
        Self {
            duration_min,
            prediction_min,
            samples_per_min,
        }
    }

    /// Simulated span in minutes, live window plus prediction horizon.
    pub fn total_minutes(&self) -> usize {
        self.duration_min + self.prediction_min
    }

    /// Grid length: total minutes times sample rate.
    pub fn total_samples(&self) -> usize {
        self.total_minutes() * self.samples_per_min
    }

    /// Index of the first prediction sample.
    pub fn live_end(&self) -> usize {
        self.duration_min * self.samples_per_min
    }
}

/// Evenly spaced time values in minutes over `[0, end]`, endpoint included.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    values: Vec<f32>,
}

impl TimeGrid {
    /// Builds a grid of `len` evenly spaced values from 0 to `end_min`.
    ///
    /// A single-sample grid holds just `0.0`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn linspace(end_min: f32, len: usize) -> Self {
        assert!(len > 0, "grid length must be > 0");
        if len == 1 {
            return Self { values: vec![0.0] };
        }
        let step = end_min / (len - 1) as f32;
        let values = (0..len).map(|i| i as f32 * step).collect();
        Self { values }
    }

    /// Builds the grid described by the timing parameters.
    pub fn from_params(params: &SimParams) -> Self {
        Self::linspace(params.total_minutes() as f32, params.total_samples())
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the grid is empty. Construction forbids it; kept for slices.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Time values in minutes.
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

/// Which part of the grid the savings analysis covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisView {
    /// Full grid, live and prediction together.
    Combined,
    /// Full grid analyzed, presented as a live prefix and prediction suffix.
    Split,
    /// Prediction tail only.
    Forecast,
}

impl AnalysisView {
    /// Parses the config string. Unknown strings are rejected by config
    /// validation before reaching this point.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "combined" => Some(Self::Combined),
            "split" => Some(Self::Split),
            "forecast" => Some(Self::Forecast),
            _ => None,
        }
    }
}

/// The two generated power curves aligned on one time grid.
#[derive(Debug, Clone)]
pub struct CurveSet {
    /// Time grid in minutes.
    pub time: TimeGrid,
    /// Optimizer-off power (MW), aligned with `time`.
    pub baseline_mw: Vec<f32>,
    /// Optimizer-on power (MW), aligned with `time`.
    pub optimized_mw: Vec<f32>,
    /// Index of the first prediction sample.
    pub live_end: usize,
}

impl CurveSet {
    /// Bundles generated curves with their grid.
    ///
    /// # Panics
    ///
    /// Panics if curve lengths disagree with the grid or `live_end` exceeds it.
    pub fn new(
        time: TimeGrid,
        baseline_mw: Vec<f32>,
        optimized_mw: Vec<f32>,
        live_end: usize,
    ) -> Self {
        assert_eq!(
            baseline_mw.len(),
            time.len(),
            "baseline curve length must match the grid"
        );
        assert_eq!(
            optimized_mw.len(),
            time.len(),
            "optimized curve length must match the grid"
        );
        assert!(live_end <= time.len(), "live_end must be within the grid");
        Self {
            time,
            baseline_mw,
            optimized_mw,
            live_end,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether the set is empty. Construction forbids it; kept for symmetry.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Live prefix index range.
    pub fn live_range(&self) -> Range<usize> {
        0..self.live_end
    }

    /// Prediction suffix index range.
    pub fn prediction_range(&self) -> Range<usize> {
        self.live_end..self.len()
    }

    /// Index range the savings analysis covers for the given view.
    pub fn analysis_range(&self, view: AnalysisView) -> Range<usize> {
        match view {
            AnalysisView::Combined | AnalysisView::Split => 0..self.len(),
            AnalysisView::Forecast => self.prediction_range(),
        }
    }
}
