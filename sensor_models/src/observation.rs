//! Radar-relative polar geometry of an obstacle.
//!
//! # Conventions
//! - Bearing is `atan2(dy, dx)`: 0 along +x, increasing toward +y.
//! - The offset is the bearing minus the radar heading, wrapped into (-π, π].
//! - Angular half-width uses the flat-disc approximation `atan(r / d)`.

use crate::{obstacle::Obstacle, radar::Radar};
use nalgebra::{Point2, Vector2};
use std::f64::consts::{PI, TAU};

/// How one obstacle appears from one radar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarObservation {
    /// Centre-to-centre distance
    pub range: f64,
    /// Bearing offset from the radar heading (radians, wrapped)
    pub offset: f64,
    /// Angular half-width of the obstacle (radians)
    pub half_width: f64,
}

impl PolarObservation {
    /// Observe `obstacle` from `radar`.
    ///
    /// An obstacle centred exactly on the radar has no defined bearing; it is
    /// reported dead ahead with a half-width equal to the radar half-angle,
    /// i.e. it fills the whole field of view.
    pub fn observe(radar: &Radar, obstacle: &Obstacle) -> Self {
        let rel: Vector2<f64> = obstacle.center() - radar.position();
        let range = rel.norm();
        if range == 0.0 {
            return Self {
                range,
                offset: 0.0,
                half_width: radar.half_angle(),
            };
        }
        Self {
            range,
            offset: wrap_angle(rel.y.atan2(rel.x) - radar.heading()),
            half_width: (obstacle.radius() / range).atan(),
        }
    }

    /// Within both the angular cone and the range of `radar`.
    pub fn is_candidate(&self, radar: &Radar) -> bool {
        -radar.half_angle() <= self.offset
            && self.offset <= radar.half_angle()
            && self.range <= radar.radius()
    }

    /// True when `beta` (offset from heading) falls on the obstacle.
    pub fn covers(&self, beta: f64) -> bool {
        self.offset - self.half_width <= beta && beta <= self.offset + self.half_width
    }
}

/// Wrap an angle into (-π, π].
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped == -PI {
        PI
    } else {
        wrapped
    }
}

/// World point at `range` along `heading + offset` from `radar`.
pub fn polar_to_cartesian(radar: &Radar, range: f64, offset: f64) -> Point2<f64> {
    let azimuth = radar.heading() + offset;
    Point2::new(
        radar.x() + range * azimuth.cos(),
        radar.y() + range * azimuth.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn radar() -> Radar {
        Radar::new(100.0, 100.0, 0.0, 90.0, PI / 3.0)
    }

    #[test]
    fn obstacle_dead_ahead() {
        let obs = PolarObservation::observe(&radar(), &Obstacle::new(150.0, 100.0, 5.0));
        assert_abs_diff_eq!(obs.range, 50.0, epsilon = 1e-12);
        assert_abs_diff_eq!(obs.offset, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(obs.half_width, 0.0997, epsilon = 1e-4);
        assert!(obs.is_candidate(&radar()));
        assert!(obs.covers(0.09));
        assert!(!obs.covers(0.11));
    }

    #[test]
    fn out_of_range_is_not_candidate() {
        let obs = PolarObservation::observe(&radar(), &Obstacle::new(195.0, 100.0, 5.0));
        assert!(!obs.is_candidate(&radar()));
    }

    #[test]
    fn behind_is_not_candidate() {
        let obs = PolarObservation::observe(&radar(), &Obstacle::new(50.0, 100.0, 5.0));
        assert_abs_diff_eq!(obs.offset, PI, epsilon = 1e-12);
        assert!(!obs.is_candidate(&radar()));
    }

    #[test]
    fn zero_distance_fills_field() {
        let obs = PolarObservation::observe(&radar(), &Obstacle::new(100.0, 100.0, 5.0));
        assert_eq!(obs.range, 0.0);
        assert_eq!(obs.half_width, PI / 3.0);
        assert!(obs.is_candidate(&radar()));
        assert!(obs.covers(-PI / 3.0));
        assert!(obs.covers(PI / 3.0));
    }

    #[test]
    fn wrap_angle_range() {
        assert_abs_diff_eq!(wrap_angle(3.0 * PI), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_angle(-PI), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_angle(TAU + 0.5), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_angle(-TAU - 0.5), -0.5, epsilon = 1e-12);
    }

    #[test]
    fn polar_roundtrip() {
        let r = radar();
        let p = polar_to_cartesian(&r, 50.0, 0.0);
        assert_abs_diff_eq!(p.x, 150.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 100.0, epsilon = 1e-9);
        let obs = PolarObservation::observe(&r, &Obstacle::new(p.x, p.y, 1.0));
        assert_abs_diff_eq!(obs.range, 50.0, epsilon = 1e-9);
    }
}
