//! Post-hoc savings analysis over a pair of aligned power curves.

use std::fmt;

/// Pointwise and integrated savings derived from one analysis window.
///
/// Computed post-hoc from the generated curves to keep the per-sample data
/// and the reported totals consistent.
#[derive(Debug, Clone)]
pub struct SavingsReport {
    /// Clipped pointwise savings (MW), aligned with the analysis window.
    pub savings_mw: Vec<f32>,
    /// Trapezoidal integral of the savings curve (MW·min).
    pub total_saved_mw_min: f32,
    /// Mean savings as a percentage of mean optimizer-off power.
    pub saving_pct: f32,
}

impl SavingsReport {
    /// Computes the savings report for one analysis window.
    ///
    /// `savings[i] = max(baseline[i] - optimized[i], 0)`: samples where the
    /// optimizer performs worse than the baseline count as zero savings,
    /// never negative. The percentage is 0 when the baseline mean is 0.
    ///
    /// # Panics
    ///
    /// Panics if the three slices differ in length.
    pub fn from_curves(baseline_mw: &[f32], optimized_mw: &[f32], time_min: &[f32]) -> Self {
        assert_eq!(
            baseline_mw.len(),
            optimized_mw.len(),
            "curve lengths must match"
        );
        assert_eq!(
            baseline_mw.len(),
            time_min.len(),
            "curves must align with the time grid"
        );

        let savings_mw: Vec<f32> = baseline_mw
            .iter()
            .zip(optimized_mw)
            .map(|(&b, &o)| (b - o).max(0.0))
            .collect();

        let total_saved_mw_min = trapezoid(&savings_mw, time_min);

        let baseline_mean = mean(baseline_mw);
        let saving_pct = if baseline_mean > 0.0 {
            100.0 * mean(&savings_mw) / baseline_mean
        } else {
            0.0
        };

        Self {
            savings_mw,
            total_saved_mw_min,
            saving_pct,
        }
    }

    /// Integrated savings converted to megawatt-hours.
    pub fn total_saved_mwh(&self) -> f32 {
        self.total_saved_mw_min / 60.0
    }
}

impl fmt::Display for SavingsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Savings Report ---")?;
        writeln!(
            f,
            "Energy saved:     {:.2} MW·min ({:.3} MWh)",
            self.total_saved_mw_min,
            self.total_saved_mwh()
        )?;
        write!(f, "Saving rate:      {:.1}%", self.saving_pct)
    }
}

/// Trapezoid-rule integral of `values` over the sample points `time`.
///
/// Unit is value-unit × time-unit; an empty or single-sample window
/// integrates to 0.
pub fn trapezoid(values: &[f32], time: &[f32]) -> f32 {
    assert_eq!(values.len(), time.len(), "integrand must align with grid");
    let mut total = 0.0_f32;
    for i in 1..values.len() {
        total += 0.5 * (values[i] + values[i - 1]) * (time[i] - time[i - 1]);
    }
    total
}

fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}
