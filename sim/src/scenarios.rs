//! Scenario definitions.
//!
//! Each scenario is a radar configuration plus an initial obstacle layout.
//! All scenarios are deterministic given the same seed.

use anyhow::{bail, Context, Result};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use sensor_models::{Obstacle, ObstacleSpec, Radar, RadarParams, PLACED_OBSTACLE_RADIUS};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::io::BufReader;
use std::path::Path;
use vision_core::{Scene, VisibilityConfig, Vision};

/// Which pre-defined scenario to load.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
pub enum ScenarioKind {
    /// Canvas-centred radar, nothing placed yet
    Empty,
    /// One obstacle 50 units dead ahead of a 90-unit radar
    Single,
    /// Near and far obstacles overlapping in bearing
    Overlap,
    /// Canvas-centred radar with a handful of placed obstacles
    Canvas,
    /// Seeded random field of obstacles around the radar
    Scattered,
}

/// A fully configured scene description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub radar: RadarParams,
    #[serde(default)]
    pub sampling: VisibilityConfig,
    #[serde(default)]
    pub obstacles: Vec<ObstacleSpec>,
}

/// Drawing area used by the canvas-style scenarios.
pub const CANVAS_WIDTH: f64 = 400.0;
pub const CANVAS_HEIGHT: f64 = 300.0;

/// Radar centred in a `width × height` canvas, reaching to 10 units short of
/// the nearest edge, pointing 30° left of +x with a 120° cone.
pub fn canvas_radar(width: f64, height: f64) -> RadarParams {
    RadarParams {
        position: [width / 2.0, height / 2.0],
        heading: -PI / 6.0,
        fov_half: PI / 3.0,
        max_range: (width / 2.0).min(height / 2.0) - 10.0,
        ..Default::default()
    }
}

impl Scenario {
    /// Build the named scenario. Uses `seed` for repeatability.
    pub fn build(kind: ScenarioKind, seed: u64) -> Self {
        match kind {
            ScenarioKind::Empty => Self::empty(seed),
            ScenarioKind::Single => Self::single(seed),
            ScenarioKind::Overlap => Self::overlap(seed),
            ScenarioKind::Canvas => Self::canvas(seed),
            ScenarioKind::Scattered => Self::scattered(seed),
        }
    }

    fn empty(seed: u64) -> Self {
        Scenario {
            name: "empty".into(),
            seed,
            radar: canvas_radar(CANVAS_WIDTH, CANVAS_HEIGHT),
            sampling: VisibilityConfig::default(),
            obstacles: Vec::new(),
        }
    }

    fn single(seed: u64) -> Self {
        Scenario {
            name: "single".into(),
            seed,
            radar: RadarParams {
                position: [100.0, 100.0],
                heading: 0.0,
                fov_half: PI / 3.0,
                max_range: 90.0,
                ..Default::default()
            },
            sampling: VisibilityConfig::default(),
            obstacles: vec![obstacle(150.0, 100.0, 5.0)],
        }
    }

    fn overlap(seed: u64) -> Self {
        Scenario {
            name: "overlap".into(),
            obstacles: vec![
                obstacle(130.0, 100.0, 5.0),
                obstacle(170.0, 104.0, 12.0),
                obstacle(160.0, 70.0, 8.0),
            ],
            ..Self::single(seed)
        }
    }

    fn canvas(seed: u64) -> Self {
        let radar = canvas_radar(CANVAS_WIDTH, CANVAS_HEIGHT);
        let [x0, y0] = radar.position;
        let obstacles = [(60.0, -0.6), (90.0, -0.45), (40.0, 0.1), (120.0, -1.3)]
            .into_iter()
            .map(|(r, bearing): (f64, f64)| {
                obstacle(
                    x0 + r * bearing.cos(),
                    y0 + r * bearing.sin(),
                    PLACED_OBSTACLE_RADIUS,
                )
            })
            .collect();
        Scenario {
            name: "canvas".into(),
            seed,
            radar,
            sampling: VisibilityConfig::default(),
            obstacles,
        }
    }

    fn scattered(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let radar = canvas_radar(CANVAS_WIDTH, CANVAS_HEIGHT);
        let [x0, y0] = radar.position;
        // Spread a little past the range so some obstacles are never seen.
        let spread = radar.max_range * 1.2;
        let obstacles = (0..40)
            .map(|_| {
                let r = spread * rng.gen::<f64>().sqrt() + 1.0;
                let az = rng.gen::<f64>() * 2.0 * PI - PI;
                let radius = 3.0 + rng.gen::<f64>() * 9.0;
                obstacle(x0 + r * az.cos(), y0 + r * az.sin(), radius)
            })
            .collect();
        Scenario {
            name: "scattered".into(),
            seed,
            radar,
            sampling: VisibilityConfig::default(),
            obstacles,
        }
    }

    /// Reject configurations the visibility engine is not defined for.
    pub fn validate(&self) -> Result<()> {
        let r = &self.radar;
        if !(r.max_range.is_finite() && r.max_range > 0.0) {
            bail!("radar range must be positive, got {}", r.max_range);
        }
        if !(r.fov_half > 0.0 && r.fov_half <= PI) {
            bail!("radar half-angle must be in (0, π], got {}", r.fov_half);
        }
        if !(r.position.iter().all(|c| c.is_finite())
            && r.heading.is_finite()
            && r.rotation_step.is_finite())
        {
            bail!("radar pose must be finite");
        }
        if !(self.sampling.sample_step.is_finite() && self.sampling.sample_step > 0.0) {
            bail!("sample step must be positive, got {}", self.sampling.sample_step);
        }
        for (i, o) in self.obstacles.iter().enumerate() {
            if !(o.x.is_finite() && o.y.is_finite()) {
                bail!("obstacle {i} has a non-finite position");
            }
            if !(o.radius.is_finite() && o.radius > 0.0) {
                bail!("obstacle {i} radius must be positive, got {}", o.radius);
            }
        }
        Ok(())
    }

    /// Instantiate a live scene with every obstacle placed.
    pub fn build_scene(&self) -> Scene {
        let mut scene = Scene::with_config(
            Radar::from_params(&self.radar),
            Vision::new(),
            self.sampling,
        );
        for spec in &self.obstacles {
            scene.add_obstacle(Obstacle::from(*spec));
        }
        tracing::debug!(
            scenario = %self.name,
            obstacles = scene.obstacle_count(),
            "scene ready"
        );
        scene
    }
}

/// Load and validate a scenario from a JSON file.
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening scenario {}", path.display()))?;
    let scenario: Scenario = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing scenario {}", path.display()))?;
    scenario.validate()?;
    Ok(scenario)
}

// ---------------------------------------------------------------------------
// Builder helpers
// ---------------------------------------------------------------------------

fn obstacle(x: f64, y: f64, radius: f64) -> ObstacleSpec {
    ObstacleSpec { x, y, radius }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use clap::ValueEnum;

    #[test]
    fn every_builtin_is_valid() {
        for kind in ScenarioKind::value_variants() {
            let scenario = Scenario::build(kind.clone(), 7);
            scenario.validate().unwrap();
            let scene = scenario.build_scene();
            assert_eq!(scene.obstacle_count(), scenario.obstacles.len());
        }
    }

    #[test]
    fn canvas_radar_matches_drawing_area() {
        let params = canvas_radar(400.0, 300.0);
        assert_eq!(params.position, [200.0, 150.0]);
        assert_eq!(params.max_range, 140.0);
        assert_abs_diff_eq!(params.heading, -PI / 6.0);
    }

    #[test]
    fn single_scenario_peak() {
        let scene = Scenario::build(ScenarioKind::Single, 0).build_scene();
        let vision = scene.vision();
        assert_eq!(vision.len(), 120);
        assert_abs_diff_eq!(vision.samples()[60], 1.0 - 50.0 / 90.0, epsilon = 1e-12);
    }

    #[test]
    fn scattered_is_deterministic_per_seed() {
        let a = Scenario::build(ScenarioKind::Scattered, 42);
        let b = Scenario::build(ScenarioKind::Scattered, 42);
        let c = Scenario::build(ScenarioKind::Scattered, 43);
        assert_eq!(a, b);
        assert_ne!(a.obstacles, c.obstacles);
    }

    #[test]
    fn validate_rejects_bad_input() {
        let mut s = Scenario::build(ScenarioKind::Single, 0);
        s.obstacles.push(obstacle(1.0, 1.0, -2.0));
        assert!(s.validate().is_err());

        let mut s = Scenario::build(ScenarioKind::Single, 0);
        s.radar.max_range = 0.0;
        assert!(s.validate().is_err());

        let mut s = Scenario::build(ScenarioKind::Single, 0);
        s.sampling.sample_step = 0.0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn json_with_defaults() {
        let json = r#"{ "name": "custom", "obstacles": [ { "x": 30.0, "y": 0.0, "radius": 2.0 } ] }"#;
        let s: Scenario = serde_json::from_str(json).unwrap();
        s.validate().unwrap();
        assert_eq!(s.radar, RadarParams::default());
        assert_eq!(s.obstacles.len(), 1);
        assert!(s.build_scene().vision().samples().iter().any(|&v| v > 0.0));
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(load_scenario(Path::new("/definitely/not/here.json")).is_err());
    }
}
