//! Circular obstacles.

use crate::notify::{Hub, Notifiable};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Radius given to obstacles placed by a pick/click input.
pub const PLACED_OBSTACLE_RADIUS: f64 = 5.0;

/// Serializable description of an obstacle (scene files, scenarios).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpec {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// A disc in the plane. Immutable once built.
#[derive(Debug)]
pub struct Obstacle {
    center: Point2<f64>,
    radius: f64,
    hub: Hub<Obstacle>,
}

impl Obstacle {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            center: Point2::new(x, y),
            radius,
            hub: Hub::new(),
        }
    }

    pub fn center(&self) -> Point2<f64> {
        self.center
    }

    pub fn x(&self) -> f64 {
        self.center.x
    }

    pub fn y(&self) -> f64 {
        self.center.y
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn spec(&self) -> ObstacleSpec {
        ObstacleSpec {
            x: self.center.x,
            y: self.center.y,
            radius: self.radius,
        }
    }
}

impl From<ObstacleSpec> for Obstacle {
    fn from(spec: ObstacleSpec) -> Self {
        Self::new(spec.x, spec.y, spec.radius)
    }
}

impl Notifiable for Obstacle {
    fn hub(&self) -> &Hub<Self> {
        &self.hub
    }

    fn hub_mut(&mut self) -> &mut Hub<Self> {
        &mut self.hub
    }
}
