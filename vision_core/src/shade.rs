//! Grayscale shade encoding of intensity samples.
//!
//! Both rounding stages round toward higher intensity: the clamped unit
//! value is scaled to `ceil(255·v)` and ceiled again before formatting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An 8-bit gray level, displayed as `#rrggbb` with equal channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Shade(pub u8);

impl Shade {
    pub const BLACK: Shade = Shade(0);
    pub const WHITE: Shade = Shade(u8::MAX);

    /// Map a unit intensity to a gray level. Out-of-range input is clamped.
    pub fn from_intensity(value: f64) -> Self {
        Shade(integer_supremum(scale_to_channel(value)) as u8)
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Two-digit lowercase hex of the level.
    pub fn hex_byte(self) -> String {
        format!("{:02x}", self.0)
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self.hex_byte();
        write!(f, "#{hex}{hex}{hex}")
    }
}

fn unit(value: f64) -> f64 {
    // NaN has no intensity
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

fn scale_to_channel(value: f64) -> f64 {
    (f64::from(u8::MAX) * unit(value)).ceil()
}

fn integer_supremum(value: f64) -> f64 {
    value.ceil()
}

/// Encode a whole profile.
pub fn shades(samples: &[f64]) -> Vec<Shade> {
    samples.iter().copied().map(Shade::from_intensity).collect()
}

/// Left offset that centres a profile of `len` samples in a raster of `width` columns.
pub fn centred_offset(width: usize, len: usize) -> f64 {
    (width as f64 - len as f64) / 2.0
}
