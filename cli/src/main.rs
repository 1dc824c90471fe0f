//! `radarvision` CLI: run a scene, replay input commands, print the radar's vision.

use anyhow::Result;
use clap::{Parser, Subcommand};
use sim::input::{apply_all, parse_script, InputCommand};
use sim::scenarios::{load_scenario, Scenario, ScenarioKind};
use std::path::{Path, PathBuf};
use vision_core::{shade::centred_offset, ProfileSummary, Scene, Vision};

/// Brightness ramp for terminal rendering, darkest first.
const RAMP: &[u8] = b" .:-=+*#%@";

#[derive(Parser)]
#[command(name = "radarvision", about = "Radar vision profile simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct RunArgs {
    /// Input commands: left, right, place:X,Y (whitespace or ';' separated)
    #[arg(long, default_value = "")]
    commands: String,
    /// Print one `#rrggbb` shade per sample
    #[arg(long)]
    shades: bool,
    /// Terminal columns used to centre the profile strip
    #[arg(long, default_value_t = 160)]
    width: usize,
    /// Write the final profile to a JSON file
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a built-in scenario.
    RunScenario {
        #[arg(value_enum)]
        scenario: ScenarioKind,
        /// Random seed for reproducibility
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Run a scenario described in a JSON file.
    RunFile {
        /// Path to scenario JSON file
        input: PathBuf,
        #[command(flatten)]
        run: RunArgs,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::RunScenario {
            scenario,
            seed,
            run,
        } => run_scenario(&Scenario::build(scenario, seed), &run)?,
        Commands::RunFile { input, run } => run_scenario(&load_scenario(&input)?, &run)?,
    }

    Ok(())
}

fn run_scenario(scenario: &Scenario, args: &RunArgs) -> Result<()> {
    let commands = parse_script(&args.commands)?;
    let mut scene = scenario.build_scene();
    scene.subscribe_vision(|vision: &Vision| {
        let peak = vision.samples().iter().cloned().fold(0.0, f64::max);
        tracing::info!(samples = vision.len(), peak, "vision reloaded");
    });

    println!(
        "Running scenario '{}' ({} obstacles, {} commands)...",
        scenario.name,
        scene.obstacle_count(),
        commands.len()
    );
    apply_all(&commands, &mut scene);

    let summary = summarize(&scene);
    println!(
        "heading={:.3} rad, obstacles={}, samples={}, peak={:.3}, lit={:.1}%",
        scene.radar().heading(),
        scene.obstacle_count(),
        summary.samples,
        summary.peak,
        summary.lit_fraction * 100.0,
    );
    if let (Some(offset), Some(distance)) = (
        summary.peak_offset,
        summary.peak_distance(scene.radar().radius()),
    ) {
        println!(
            "nearest occluder at {:.1}° off heading, ~{:.1} units",
            offset.to_degrees(),
            distance
        );
    }
    println!("[{}]", strip(scene.vision().samples(), args.width));

    if args.shades {
        for shade in scene.vision().color_samples() {
            println!("{shade}");
        }
    }

    if let Some(path) = &args.output {
        write_output(path, scenario, &commands, &scene, &summary)?;
        println!("Profile saved to {}", path.display());
    }

    Ok(())
}

fn summarize(scene: &Scene) -> ProfileSummary {
    ProfileSummary::from_profile(
        scene.vision().samples(),
        scene.radar().half_angle(),
        scene.config().sample_step,
    )
}

/// One character per sample, centred in `width` columns.
fn strip(samples: &[f64], width: usize) -> String {
    let pad = centred_offset(width, samples.len()).max(0.0) as usize;
    let last = (RAMP.len() - 1) as f64;
    let body: String = samples
        .iter()
        .map(|v| RAMP[(v.clamp(0.0, 1.0) * last).ceil() as usize] as char)
        .collect();
    format!("{:pad$}{body}{:pad$}", "", "")
}

fn write_output(
    path: &Path,
    scenario: &Scenario,
    commands: &[InputCommand],
    scene: &Scene,
    summary: &ProfileSummary,
) -> Result<()> {
    let vision = scene.vision();
    let json = serde_json::json!({
        "scenario": scenario.name,
        "seed": scenario.seed,
        "commands": commands.iter().map(ToString::to_string).collect::<Vec<_>>(),
        "heading": scene.radar().heading(),
        "samples": vision.samples(),
        "shades": vision.color_samples().iter().map(ToString::to_string).collect::<Vec<_>>(),
        "summary": summary,
    });
    std::fs::write(path, serde_json::to_string_pretty(&json)?)?;
    Ok(())
}
