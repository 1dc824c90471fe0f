//! Scene coordinator: owns the radar, the obstacles and the vision, and
//! keeps the vision in sync with both.
//!
//! # Recompute triggers
//! - Every radar rotation, through an observer registered on the radar at
//!   construction time.
//! - Every [`Scene::add_obstacle`], followed by a scene-level notification.
//!
//! Observers of the vision are called while the scene holds the vision
//! mutably; they must read the new profile from the `&Vision` they receive.

use crate::{
    types::ObstacleId,
    visibility::{VisibilityConfig, VisibilityEngine},
    vision::Vision,
};
use sensor_models::{Hub, Notifiable, Obstacle, Radar, PLACED_OBSTACLE_RADIUS};
use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

/// Recompute the profile for `radar` and load it into `vision`.
fn recompute(
    engine: &VisibilityEngine,
    radar: &Radar,
    obstacles: &RefCell<Vec<Obstacle>>,
    vision: &RefCell<Vision>,
) {
    let samples = engine.compute(radar, obstacles.borrow().iter());
    tracing::trace!(
        heading = radar.heading(),
        samples = samples.len(),
        "vision recomputed"
    );
    vision.borrow_mut().reload(samples);
}

/// One radar, a growing list of obstacles and the radar's vision.
pub struct Scene {
    radar: Radar,
    obstacles: Rc<RefCell<Vec<Obstacle>>>,
    vision: Rc<RefCell<Vision>>,
    engine: VisibilityEngine,
    hub: Hub<Scene>,
}

impl Scene {
    /// Build a scene with 1° sampling. The vision is computed immediately.
    pub fn new(radar: Radar, vision: Vision) -> Self {
        Self::with_config(radar, vision, VisibilityConfig::default())
    }

    pub fn with_config(mut radar: Radar, vision: Vision, config: VisibilityConfig) -> Self {
        let engine = VisibilityEngine::new(config);
        let obstacles = Rc::new(RefCell::new(Vec::new()));
        let vision = Rc::new(RefCell::new(vision));

        {
            let obstacles = Rc::clone(&obstacles);
            let vision = Rc::clone(&vision);
            radar.subscribe(move |radar: &Radar| recompute(&engine, radar, &obstacles, &vision));
        }

        let scene = Self {
            radar,
            obstacles,
            vision,
            engine,
            hub: Hub::new(),
        };
        scene.determine_vision();
        scene
    }

    /// Recompute the profile from the current radar and obstacles.
    pub fn determine_vision(&self) {
        recompute(&self.engine, &self.radar, &self.obstacles, &self.vision);
    }

    /// Append an obstacle, recompute, then notify scene observers.
    pub fn add_obstacle(&mut self, obstacle: Obstacle) -> ObstacleId {
        let id = {
            let mut obstacles = self.obstacles.borrow_mut();
            obstacles.push(obstacle);
            ObstacleId(obstacles.len() as u64 - 1)
        };
        tracing::debug!(obstacle = %id, "obstacle added");
        self.determine_vision();
        self.notify_all();
        id
    }

    /// Place an obstacle of the standard pick radius at (x, y).
    pub fn place_obstacle(&mut self, x: f64, y: f64) -> ObstacleId {
        self.add_obstacle(Obstacle::new(x, y, PLACED_OBSTACLE_RADIUS))
    }

    pub fn rotate_left(&mut self) {
        self.radar.rotate_left();
    }

    pub fn rotate_right(&mut self) {
        self.radar.rotate_right();
    }

    pub fn radar(&self) -> &Radar {
        &self.radar
    }

    /// Observe radar rotations. Runs after the vision has been recomputed.
    pub fn subscribe_radar(&mut self, observer: impl Fn(&Radar) + 'static) {
        self.radar.subscribe(observer);
    }

    pub fn vision(&self) -> Ref<'_, Vision> {
        self.vision.borrow()
    }

    pub fn subscribe_vision(&self, observer: impl Fn(&Vision) + 'static) {
        self.vision.borrow_mut().subscribe(observer);
    }

    pub fn obstacles(&self) -> Ref<'_, [Obstacle]> {
        Ref::map(self.obstacles.borrow(), |o| o.as_slice())
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.borrow().len()
    }

    /// Observe one obstacle. Returns false when `id` is unknown.
    pub fn subscribe_obstacle(&self, id: ObstacleId, observer: impl Fn(&Obstacle) + 'static) -> bool {
        let mut obstacles = self.obstacles.borrow_mut();
        match obstacles.get_mut(id.0 as usize) {
            Some(obstacle) => {
                obstacle.subscribe(observer);
                true
            }
            None => false,
        }
    }

    pub fn config(&self) -> VisibilityConfig {
        self.engine.config
    }
}

impl Notifiable for Scene {
    fn hub(&self) -> &Hub<Self> {
        &self.hub
    }

    fn hub_mut(&mut self) -> &mut Hub<Self> {
        &mut self.hub
    }
}
