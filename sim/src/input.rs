//! Input commands: the two command shapes a scene accepts from an input source.
//!
//! Text form, one command per token:
//! - `left` / `l`      — rotate the radar left by one step
//! - `right` / `r`     — rotate the radar right by one step
//! - `place:X,Y` / `p:X,Y` — place a standard obstacle at (X, Y)

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use vision_core::Scene;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputCommand {
    RotateLeft,
    RotateRight,
    Place { x: f64, y: f64 },
}

impl InputCommand {
    pub fn apply(&self, scene: &mut Scene) {
        match *self {
            InputCommand::RotateLeft => scene.rotate_left(),
            InputCommand::RotateRight => scene.rotate_right(),
            InputCommand::Place { x, y } => {
                let id = scene.place_obstacle(x, y);
                tracing::debug!(obstacle = %id, x, y, "placed obstacle");
            }
        }
    }
}

impl FromStr for InputCommand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "left" | "l" => return Ok(InputCommand::RotateLeft),
            "right" | "r" => return Ok(InputCommand::RotateRight),
            _ => {}
        }

        let Some((verb, args)) = s.split_once(':') else {
            bail!("unknown command '{s}'");
        };
        if !matches!(verb.to_ascii_lowercase().as_str(), "place" | "p") {
            bail!("unknown command '{verb}'");
        }
        let (x, y) = args
            .split_once(',')
            .with_context(|| format!("expected 'place:X,Y', got '{s}'"))?;
        let x: f64 = x.trim().parse().with_context(|| format!("bad x in '{s}'"))?;
        let y: f64 = y.trim().parse().with_context(|| format!("bad y in '{s}'"))?;
        if !x.is_finite() || !y.is_finite() {
            bail!("coordinates must be finite in '{s}'");
        }
        Ok(InputCommand::Place { x, y })
    }
}

impl fmt::Display for InputCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputCommand::RotateLeft => write!(f, "left"),
            InputCommand::RotateRight => write!(f, "right"),
            InputCommand::Place { x, y } => write!(f, "place:{x},{y}"),
        }
    }
}

/// Parse a whitespace- or `;`-separated command script.
pub fn parse_script(script: &str) -> Result<Vec<InputCommand>> {
    script
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|token| !token.is_empty())
        .map(str::parse::<InputCommand>)
        .collect()
}

/// Apply every command in order.
pub fn apply_all(commands: &[InputCommand], scene: &mut Scene) {
    for command in commands {
        command.apply(scene);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use sensor_models::Radar;
    use std::f64::consts::PI;
    use vision_core::Vision;

    #[test]
    fn parse_all_forms() {
        let cmds = parse_script("left R; place:150,100\n p:1.5,-2").unwrap();
        assert_eq!(
            cmds,
            vec![
                InputCommand::RotateLeft,
                InputCommand::RotateRight,
                InputCommand::Place { x: 150.0, y: 100.0 },
                InputCommand::Place { x: 1.5, y: -2.0 },
            ]
        );
    }

    #[test]
    fn display_parses_back() {
        for cmd in [
            InputCommand::RotateLeft,
            InputCommand::RotateRight,
            InputCommand::Place { x: 3.25, y: -7.0 },
        ] {
            assert_eq!(cmd.to_string().parse::<InputCommand>().unwrap(), cmd);
        }
    }

    #[test]
    fn rejects_bad_commands() {
        assert!("up".parse::<InputCommand>().is_err());
        assert!("place:1".parse::<InputCommand>().is_err());
        assert!("place:a,2".parse::<InputCommand>().is_err());
        assert!("place:inf,2".parse::<InputCommand>().is_err());
        assert!("jump:1,2".parse::<InputCommand>().is_err());
        assert!(parse_script("left nope").is_err());
    }

    #[test]
    fn commands_drive_the_scene() {
        let radar = Radar::new(100.0, 100.0, 0.0, 90.0, PI / 3.0).with_step(0.1);
        let mut scene = Scene::new(radar, Vision::new());
        let script = parse_script("place:150,100 right right left").unwrap();

        apply_all(&script, &mut scene);

        assert_eq!(scene.obstacle_count(), 1);
        assert_abs_diff_eq!(scene.radar().heading(), 0.1, epsilon = 1e-12);
        assert!(scene.vision().samples().iter().any(|&v| v > 0.0));
    }
}
