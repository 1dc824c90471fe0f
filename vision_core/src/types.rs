//! Fundamental types shared by the vision pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Angular sampling step of the visibility profile: one degree.
pub const DEFAULT_SAMPLE_STEP: f64 = std::f64::consts::PI / 180.0;

/// One intensity sample in [0, 1].
pub type Sample = f64;

// ---------------------------------------------------------------------------
// Identifier types
// ---------------------------------------------------------------------------

/// Position of an obstacle in the scene's insertion order.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ObstacleId(pub u64);

impl fmt::Display for ObstacleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "O{}", self.0)
    }
}
