//! `sensor_models` — Radar pose, circular obstacles, relative geometry, change notification.

pub mod notify;
pub mod observation;
pub mod obstacle;
pub mod radar;

pub use notify::{Hub, Notifiable};
pub use observation::{wrap_angle, PolarObservation};
pub use obstacle::{Obstacle, ObstacleSpec, PLACED_OBSTACLE_RADIUS};
pub use radar::{Radar, RadarParams};
