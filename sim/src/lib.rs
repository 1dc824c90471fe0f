//! `sim` — Scene scenarios and the input command model.

pub mod input;
pub mod scenarios;

pub use input::{apply_all, parse_script, InputCommand};
pub use scenarios::{load_scenario, Scenario, ScenarioKind};
