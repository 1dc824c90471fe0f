//! Profile summary: peak intensity, where it sits, and how much of the field is lit.

use crate::types::Sample;
use serde::{Deserialize, Serialize};

/// Summary statistics of one intensity profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    /// Number of samples
    pub samples: usize,
    /// Highest intensity (0 when nothing is visible)
    pub peak: Sample,
    /// Index of the first sample reaching `peak`
    pub peak_index: Option<usize>,
    /// Offset from the heading of `peak_index` (radians)
    pub peak_offset: Option<f64>,
    /// Fraction of samples with a non-zero intensity
    pub lit_fraction: f64,
}

impl ProfileSummary {
    /// Summarise `samples` taken every `step` radians starting at `-half_angle`.
    pub fn from_profile(samples: &[Sample], half_angle: f64, step: f64) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let mut peak = 0.0;
        let mut peak_index = None;
        for (i, &v) in samples.iter().enumerate() {
            if v > peak {
                peak = v;
                peak_index = Some(i);
            }
        }
        let lit = samples.iter().filter(|&&v| v > 0.0).count();

        Self {
            samples: samples.len(),
            peak,
            peak_index,
            peak_offset: peak_index.map(|i| -half_angle + i as f64 * step),
            lit_fraction: lit as f64 / samples.len() as f64,
        }
    }

    /// Estimated distance of the brightest occluder for a radar of `range`.
    pub fn peak_distance(&self, range: f64) -> Option<f64> {
        self.peak_index.map(|_| (1.0 - self.peak) * range)
    }
}
