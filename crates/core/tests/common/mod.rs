//! Shared test infrastructure for the simulator suite.

use std::sync::{Arc, Mutex};

use bcsim_core::common::{Warning, WarningSink};

/// A warning sink that records everything it receives.
///
/// Cloning shares the underlying buffer, so a test can keep one handle and
/// hand another to the operator context.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    warnings: Arc<Mutex<Vec<Warning>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all warnings received so far.
    pub fn snapshot(&self) -> Vec<Warning> {
        self.warnings.lock().unwrap().clone()
    }

    /// Returns the number of warnings received so far.
    pub fn count(&self) -> usize {
        self.warnings.lock().unwrap().len()
    }

    /// Returns the saturation reports received so far as (stream, value).
    pub fn saturations(&self) -> Vec<f64> {
        self.warnings
            .lock()
            .unwrap()
            .iter()
            .filter_map(|w| match w {
                Warning::Saturation { value, .. } => Some(*value),
                Warning::CorrelatedOperands { .. } => None,
            })
            .collect()
    }

    /// Returns how many correlated-operand reports were received.
    pub fn correlations(&self) -> usize {
        self.warnings
            .lock()
            .unwrap()
            .iter()
            .filter(|w| matches!(w, Warning::CorrelatedOperands { .. }))
            .count()
    }
}

impl WarningSink for RecordingSink {
    fn report(&mut self, warning: Warning) {
        self.warnings.lock().unwrap().push(warning);
    }
}

/// Empirical mean of `n` samples produced by `f`.
pub fn empirical_mean(n: usize, mut f: impl FnMut() -> f64) -> f64 {
    let mut sum = 0.0;
    for _ in 0..n {
        sum += f();
    }
    sum / n as f64
}

/// Sample covariance of `n` paired samples produced by `f`.
pub fn sample_covariance(n: usize, mut f: impl FnMut() -> (f64, f64)) -> f64 {
    let pairs: Vec<(f64, f64)> = (0..n).map(|_| f()).collect();
    let mean_a = pairs.iter().map(|p| p.0).sum::<f64>() / n as f64;
    let mean_b = pairs.iter().map(|p| p.1).sum::<f64>() / n as f64;
    pairs
        .iter()
        .map(|(a, b)| (a - mean_a) * (b - mean_b))
        .sum::<f64>()
        / (n - 1) as f64
}
