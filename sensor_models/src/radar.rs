//! Radar sensor: pose, field of view and discrete heading rotation.

use crate::notify::{Hub, Notifiable};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Default heading rotation increment (radians).
pub const DEFAULT_ROTATION_STEP: f64 = PI / 50.0;

/// Physical configuration of a radar sensor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarParams {
    /// Radar position (x, y) in world coordinates
    pub position: [f64; 2],
    /// Heading of the boresight (radians, 0 = +x axis)
    pub heading: f64,
    /// Field of view half-angle (radians, > 0)
    pub fov_half: f64,
    /// Maximum detection range (> 0)
    pub max_range: f64,
    /// Heading change per rotate command (radians)
    pub rotation_step: f64,
}

impl Default for RadarParams {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0],
            heading: 0.0,
            fov_half: PI / 3.0, // 120° cone
            max_range: 100.0,
            rotation_step: DEFAULT_ROTATION_STEP,
        }
    }
}

/// A radar with a mutable heading. Everything else is fixed at construction.
#[derive(Debug)]
pub struct Radar {
    position: Point2<f64>,
    /// Unbounded: only ever consumed through trigonometry or wrapped offsets.
    heading: f64,
    half_angle: f64,
    radius: f64,
    step: f64,
    hub: Hub<Radar>,
}

impl Radar {
    pub fn new(x: f64, y: f64, heading: f64, radius: f64, half_angle: f64) -> Self {
        Self {
            position: Point2::new(x, y),
            heading,
            half_angle,
            radius,
            step: DEFAULT_ROTATION_STEP,
            hub: Hub::new(),
        }
    }

    pub fn from_params(params: &RadarParams) -> Self {
        Self::new(
            params.position[0],
            params.position[1],
            params.heading,
            params.max_range,
            params.fov_half,
        )
        .with_step(params.rotation_step)
    }

    /// Override the rotation increment.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Turn counter-clockwise by one step and notify observers.
    pub fn rotate_left(&mut self) {
        self.heading -= self.step;
        self.notify_all();
    }

    /// Turn clockwise by one step and notify observers.
    pub fn rotate_right(&mut self) {
        self.heading += self.step;
        self.notify_all();
    }

    pub fn position(&self) -> Point2<f64> {
        self.position
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn half_angle(&self) -> f64 {
        self.half_angle
    }

    /// Maximum detection range.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Endpoints of the two cone edges at full range, (left, right).
    /// Handy for drawing the sensor wedge.
    pub fn cone_edges(&self) -> (Point2<f64>, Point2<f64>) {
        let edge = |angle: f64| {
            Point2::new(
                self.position.x + self.radius * angle.cos(),
                self.position.y + self.radius * angle.sin(),
            )
        };
        (
            edge(self.heading - self.half_angle),
            edge(self.heading + self.half_angle),
        )
    }
}

impl Notifiable for Radar {
    fn hub(&self) -> &Hub<Self> {
        &self.hub
    }

    fn hub_mut(&mut self) -> &mut Hub<Self> {
        &mut self.hub
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn rotation_adds_and_subtracts_step() {
        let mut radar = Radar::new(0.0, 0.0, 0.0, 50.0, PI / 4.0).with_step(0.1);
        radar.rotate_right();
        radar.rotate_right();
        assert_abs_diff_eq!(radar.heading(), 0.2, epsilon = 1e-12);
        radar.rotate_left();
        assert_abs_diff_eq!(radar.heading(), 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(radar.half_angle(), PI / 4.0);
    }

    #[test]
    fn rotation_is_unbounded() {
        let mut radar = Radar::new(0.0, 0.0, 0.0, 50.0, PI / 4.0);
        for _ in 0..200 {
            radar.rotate_right();
        }
        assert_abs_diff_eq!(radar.heading(), 4.0 * PI, epsilon = 1e-9);
    }

    #[test]
    fn observers_see_new_heading() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut radar = Radar::new(0.0, 0.0, 1.0, 50.0, PI / 4.0).with_step(0.5);
        let log = Rc::clone(&seen);
        radar.subscribe(move |r: &Radar| log.borrow_mut().push(r.heading()));

        radar.rotate_left();
        radar.rotate_right();

        assert_eq!(*seen.borrow(), vec![0.5, 1.0]);
    }

    #[test]
    fn from_params_copies_every_field() {
        let params = RadarParams {
            position: [3.0, 4.0],
            heading: 0.25,
            fov_half: 0.5,
            max_range: 42.0,
            rotation_step: 0.01,
        };
        let radar = Radar::from_params(&params);
        assert_eq!((radar.x(), radar.y()), (3.0, 4.0));
        assert_eq!(radar.heading(), 0.25);
        assert_eq!(radar.half_angle(), 0.5);
        assert_eq!(radar.radius(), 42.0);
        assert_eq!(radar.step(), 0.01);
    }

    #[test]
    fn cone_edges_at_full_range() {
        let radar = Radar::new(0.0, 0.0, 0.0, 10.0, PI / 2.0);
        let (left, right) = radar.cone_edges();
        assert_abs_diff_eq!(left.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(left.y, -10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(right.y, 10.0, epsilon = 1e-9);
    }
}
