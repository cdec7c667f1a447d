//! Gaussian kernel density estimate with Scott's bandwidth.

use std::f64::consts::PI;

use crate::profile::stats::RunningMoments;

#[derive(Debug, Clone)]
pub struct KernelDensity {
    samples: Vec<f64>,
    bandwidth: f64,
}

impl KernelDensity {
    /// `None` when the samples cannot support a density (fewer than two
    /// values or zero spread).
    pub fn fit(samples: &[f64]) -> Option<Self> {
        let moments: RunningMoments = samples.iter().copied().collect();
        let std = moments.sample_std()?;
        if std <= 0.0 || !std.is_finite() {
            return None;
        }

        let bandwidth = std * (samples.len() as f64).powf(-0.2);
        Some(Self {
            samples: samples.to_vec(),
            bandwidth,
        })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let norm = 1.0 / (self.samples.len() as f64 * self.bandwidth * (2.0 * PI).sqrt());
        let sum: f64 = self
            .samples
            .iter()
            .map(|xi| {
                let z = (x - xi) / self.bandwidth;
                (-0.5 * z * z).exp()
            })
            .sum();
        norm * sum
    }

    /// `points` evenly spaced `(x, density)` pairs over `[start, end]`.
    pub fn curve(&self, start: f64, end: f64, points: usize) -> Vec<(f64, f64)> {
        if points < 2 {
            return vec![(start, self.evaluate(start))];
        }
        let step = (end - start) / (points - 1) as f64;
        (0..points)
            .map(|i| {
                let x = start + step * i as f64;
                (x, self.evaluate(x))
            })
            .collect()
    }
}
