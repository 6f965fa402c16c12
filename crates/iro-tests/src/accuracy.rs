//! Accuracy measurement over channel buffers
//!
//! Differences are plain absolute per-channel errors. Every space compared
//! here keeps its channels on a unit scale, so a single tolerance covers a
//! whole comparison.

use rayon::prelude::*;

/// Statistics from an absolute-error comparison
#[derive(Debug, Clone)]
pub struct ErrorStats {
    /// Mean absolute error across all channels
    pub mean: f64,
    /// Maximum absolute error
    pub max: f64,
    /// 95th percentile absolute error
    pub p95: f64,
    /// Number of channels compared
    pub count: usize,
}

impl ErrorStats {
    /// Build statistics from a list of absolute errors
    pub fn from_errors(mut errors: Vec<f64>) -> Self {
        if errors.is_empty() {
            return Self {
                mean: 0.0,
                max: 0.0,
                p95: 0.0,
                count: 0,
            };
        }

        errors.par_sort_unstable_by(f64::total_cmp);

        let count = errors.len();
        let mean = errors.iter().sum::<f64>() / count as f64;
        let max = errors[count - 1];
        let p95_idx = ((count as f64 * 0.95) as usize).min(count - 1);
        let p95 = errors[p95_idx];

        Self {
            mean,
            max,
            p95,
            count,
        }
    }

    /// Check if every error is at most `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max <= tolerance
    }
}

impl std::fmt::Display for ErrorStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "mean={:.3e} p95={:.3e} max={:.3e} (n={})",
            self.mean, self.p95, self.max, self.count
        )
    }
}

/// Compare two float buffers channel by channel
///
/// Buffers of different lengths are compared over the shorter one.
pub fn compare_f64_buffers(a: &[f64], b: &[f64]) -> ErrorStats {
    let errors = a
        .par_iter()
        .zip(b.par_iter())
        .map(|(x, y)| (x - y).abs())
        .collect();
    ErrorStats::from_errors(errors)
}

/// Compare two 8-bit buffers, errors in code values
pub fn compare_u8_buffers(a: &[u8], b: &[u8]) -> ErrorStats {
    let errors = a
        .par_iter()
        .zip(b.par_iter())
        .map(|(&x, &y)| (x as f64 - y as f64).abs())
        .collect();
    ErrorStats::from_errors(errors)
}
