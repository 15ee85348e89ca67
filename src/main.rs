use anyhow::{Context, Result};
use clap::Parser;
use rrt_rust::draw;
use rrt_rust::rrt::{RRTParams, RRT};
use rrt_rust::scenario::{self, Scenario};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "rrt_rust")]
#[command(about = "Grow an RRT between two points among rectangular obstacles and plot the result")]
struct Args {
    /// Planner parameter file (json, toml, yaml, ...)
    #[arg(long)]
    params: Option<String>,

    /// Scenario file with start, goal and obstacles (json). Overrides --obstacles
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Number of randomly placed obstacles
    #[arg(long, default_value = "10", value_parser = parse_obstacle_count)]
    obstacles: usize,

    /// Seed for scenario generation and sampling, drawn from entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Output image
    #[arg(long, default_value = "tree.png")]
    output: PathBuf,

    /// Output image width in pixels
    #[arg(long, default_value = "800")]
    width: u32,

    /// Output image height in pixels
    #[arg(long, default_value = "600")]
    height: u32,

    /// Also write the planning result as json
    #[arg(long)]
    result: Option<PathBuf>,
}

fn parse_obstacle_count(input: &str) -> Result<usize, String> {
    scenario::parse_obstacle_count(input).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let params = match &args.params {
        Some(filename) => RRTParams::from_file(filename)
            .with_context(|| format!("failed to load parameters from {}", filename))?,
        None => RRTParams::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Parameters: {:?}, seed: {}", params, seed);

    let scenario = match &args.scenario {
        Some(filename) => Scenario::from_file(filename)
            .with_context(|| format!("failed to load scenario from {}", filename.display()))?,
        None => Scenario::random(args.obstacles, &params, seed)?,
    };
    info!(
        "Start: ({:.1}, {:.1}), goal: ({:.1}, {:.1}), {} obstacles",
        scenario.start[0],
        scenario.start[1],
        scenario.goal[0],
        scenario.goal[1],
        scenario.obstacles.len()
    );

    let mut rrt = RRT::new(params, seed)?;
    let result = rrt.grow_towards_goal(scenario.start, scenario.goal, &scenario.obstacles)?;
    if result.is_found() {
        info!("Path points:");
        for p in result.path() {
            info!("  ({:.2}, {:.2})", p[0], p[1]);
        }
    } else {
        warn!("Planner exhausted its iteration budget without reaching the goal");
    }

    draw::draw_tree(
        &args.output,
        (args.width, args.height),
        &result,
        &scenario,
        &params,
    )?;
    info!("Tree drawn to {}", args.output.display());

    if let Some(filename) = &args.result {
        result
            .save_to_json(filename)
            .with_context(|| format!("failed to write result to {}", filename.display()))?;
        info!("Result written to {}", filename.display());
    }
    Ok(())
}
