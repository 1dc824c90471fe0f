//! Visibility engine: radar + obstacles → sampled intensity profile.
//!
//! # Algorithm
//! 1. Sample the half-open field `[-half_angle, +half_angle)` at a fixed step
//!    (1° by default), `floor(2·half_angle / step)` samples.
//! 2. Keep only candidate obstacles: inside the cone and within range.
//! 3. Each candidate lights the samples inside `offset ± half_width` with
//!    intensity `1 - d / range`.
//! 4. Every sample is the maximum over the zero baseline and all candidates,
//!    so the nearest occluder wins without any depth sorting.

use crate::types::{Sample, DEFAULT_SAMPLE_STEP};
use sensor_models::{Obstacle, PolarObservation, Radar};
use serde::{Deserialize, Serialize};

/// Absorbs float error when `2·half_angle` is an exact multiple of the step.
const COUNT_TOLERANCE: f64 = 1e-9;

/// Configuration of the angular sampling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    /// Angular distance between consecutive samples (radians)
    pub sample_step: f64,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            sample_step: DEFAULT_SAMPLE_STEP,
        }
    }
}

/// A candidate obstacle reduced to what the sampler needs.
#[derive(Clone, Copy, Debug)]
struct Occluder {
    observation: PolarObservation,
    intensity: Sample,
}

impl Occluder {
    fn intensity_at(&self, beta: f64) -> Sample {
        if self.observation.covers(beta) {
            self.intensity
        } else {
            0.0
        }
    }
}

/// Pure visibility computation with a fixed sampling configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityEngine {
    pub config: VisibilityConfig,
}

impl VisibilityEngine {
    pub fn new(config: VisibilityConfig) -> Self {
        Self { config }
    }

    /// Number of samples produced for a given half-angle.
    pub fn sample_count(&self, half_angle: f64) -> usize {
        let n = 2.0 * half_angle / self.config.sample_step + COUNT_TOLERANCE;
        if n.is_finite() && n > 0.0 {
            n.floor() as usize
        } else {
            0
        }
    }

    /// Offsets from the heading at which samples are taken, increasing.
    pub fn sample_offsets(&self, half_angle: f64) -> impl Iterator<Item = f64> {
        let step = self.config.sample_step;
        (0..self.sample_count(half_angle)).map(move |i| -half_angle + i as f64 * step)
    }

    /// Sampled intensity profile of `obstacles` as seen by `radar`.
    pub fn compute<'a, I>(&self, radar: &Radar, obstacles: I) -> Vec<Sample>
    where
        I: IntoIterator<Item = &'a Obstacle>,
    {
        let occluders: Vec<Occluder> = obstacles
            .into_iter()
            .map(|o| PolarObservation::observe(radar, o))
            .filter(|obs| obs.is_candidate(radar))
            .map(|observation| Occluder {
                observation,
                intensity: 1.0 - observation.range / radar.radius(),
            })
            .collect();

        self.sample_offsets(radar.half_angle())
            .map(|beta| {
                occluders
                    .iter()
                    .map(|o| o.intensity_at(beta))
                    .fold(0.0, f64::max)
            })
            .collect()
    }
}

/// [`VisibilityEngine::compute`] with the default 1° sampling.
pub fn compute_visibility(radar: &Radar, obstacles: &[Obstacle]) -> Vec<Sample> {
    VisibilityEngine::default().compute(radar, obstacles)
}
