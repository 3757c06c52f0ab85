//! Contiguous-zone detection over boolean condition masks.
//!
//! A single linear scan turns a mask into maximal runs of consecutive true
//! samples; runs at or below the minimum length are discarded. Callers use
//! the surviving segments to annotate savings or anomaly zones.

use serde::Serialize;

/// A maximal contiguous run of true samples, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// First index of the run.
    pub start: usize,
    /// Last index of the run (inclusive).
    pub end: usize,
}

impl Segment {
    /// Number of samples covered.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// A segment always covers at least one sample.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Annotation anchor: run start plus half the run length, truncated
    /// toward the start.
    pub fn midpoint(&self) -> usize {
        self.start + self.len() / 2
    }
}

/// Scans `mask` and returns every maximal true run strictly longer than
/// `min_run_len`, in index order.
///
/// O(n) in the mask length; an empty or all-false mask yields no segments.
pub fn find_segments(mask: &[bool], min_run_len: usize) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut run_start: Option<usize> = None;

    for (i, &flag) in mask.iter().enumerate() {
        match (flag, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                if i - start > min_run_len {
                    segments.push(Segment { start, end: i - 1 });
                }
                run_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = run_start
        && mask.len() - start > min_run_len
    {
        segments.push(Segment {
            start,
            end: mask.len() - 1,
        });
    }

    segments
}

/// Mask of samples where the optimizer-off curve exceeds the optimizer-on
/// curve.
///
/// # Panics
///
/// Panics if the curves differ in length.
pub fn savings_mask(baseline_mw: &[f32], optimized_mw: &[f32]) -> Vec<bool> {
    assert_eq!(
        baseline_mw.len(),
        optimized_mw.len(),
        "curve lengths must match"
    );
    baseline_mw
        .iter()
        .zip(optimized_mw)
        .map(|(&b, &o)| b > o)
        .collect()
}

/// Mask of samples deviating from the window mean by more than
/// `threshold_mw` in either direction.
pub fn deviation_mask(curve_mw: &[f32], threshold_mw: f32) -> Vec<bool> {
    if curve_mw.is_empty() {
        return Vec::new();
    }
    let mean = curve_mw.iter().sum::<f32>() / curve_mw.len() as f32;
    curve_mw
        .iter()
        .map(|&v| (v - mean).abs() > threshold_mw)
        .collect()
}
