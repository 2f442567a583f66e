#![deny(unsafe_code)]
//! CLI driver for the bouncy-balls engine.
//!
//! Subcommands:
//! - `render <image>` — sample an image, run N ticks, write the final frame
//! - `animate <image>` — same, writing every frame into a directory
//! - `sample <image>` — sample only, print point-field statistics

mod error;
mod pointer;

use bouncy_core::{Rgba, Stage};
use bouncy_raster::{write_png, Pixmap};
use bouncy_sampler::{load_image, ImageSampler, SamplerOptions};
use clap::{Args, Parser, Subcommand};
use error::CliError;
use pointer::{pointer_position, PointerPath};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "bouncy", about = "Bouncy-balls image particle engine")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Sampling configuration flags shared by every subcommand.
#[derive(Args)]
struct SamplerArgs {
    /// Longest edge of the scaled point field, in px.
    #[arg(long, default_value_t = 200.0)]
    max_length: f64,

    /// Spacing between grid cells, in px.
    #[arg(long, default_value_t = 14.0)]
    spacing: f64,

    /// Target radius of each point.
    #[arg(long, default_value_t = 3.0)]
    ball_size: f64,

    /// Percentage size jitter (0-100), re-rolled per point.
    #[arg(long, default_value_t = 0.0)]
    variance: f64,

    /// X of the field center. Defaults to the canvas center.
    #[arg(long)]
    x_origin: Option<f64>,

    /// Y of the field center. Defaults to the canvas center.
    #[arg(long)]
    y_origin: Option<f64>,
}

impl SamplerArgs {
    fn to_options(&self, default_origin: (f64, f64)) -> SamplerOptions {
        SamplerOptions {
            max_length: self.max_length,
            spacing: self.spacing,
            ball_size: self.ball_size,
            variance: self.variance,
            x_origin: self.x_origin.unwrap_or(default_origin.0),
            y_origin: self.y_origin.unwrap_or(default_origin.1),
        }
    }
}

/// Simulation flags shared by `render` and `animate`.
#[derive(Args)]
struct SimArgs {
    /// Canvas width in pixels.
    #[arg(short = 'W', long, default_value_t = 800)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(short = 'H', long, default_value_t = 600)]
    height: u32,

    /// Number of simulation ticks.
    #[arg(short, long, default_value_t = 100)]
    ticks: usize,

    /// Velocity damping coefficient in [0, 1).
    #[arg(long, default_value_t = 0.2)]
    friction: f64,

    /// PRNG seed for deterministic size jitter.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Scripted pointer trajectory.
    #[arg(long, value_enum, default_value = "sweep")]
    path: PointerPath,

    /// Pointer x for --path still. Defaults to the canvas center.
    #[arg(long)]
    pointer_x: Option<f64>,

    /// Pointer y for --path still. Defaults to the canvas center.
    #[arg(long)]
    pointer_y: Option<f64>,
}

#[derive(Subcommand)]
enum Command {
    /// Sample an image, run N ticks, and write the final frame as PNG.
    Render {
        /// Source image path.
        image: PathBuf,

        #[command(flatten)]
        sim: SimArgs,

        #[command(flatten)]
        sampler: SamplerArgs,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,
    },
    /// Sample an image and write every frame into a directory.
    Animate {
        /// Source image path.
        image: PathBuf,

        #[command(flatten)]
        sim: SimArgs,

        #[command(flatten)]
        sampler: SamplerArgs,

        /// Directory receiving frame-0000.png, frame-0001.png, ...
        #[arg(short, long, default_value = "frames")]
        out_dir: PathBuf,
    },
    /// Sample an image and print point-field statistics.
    Sample {
        /// Source image path.
        image: PathBuf,

        #[command(flatten)]
        sampler: SamplerArgs,

        /// PRNG seed for deterministic size jitter.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

/// Loads the image and builds a one-scene stage around its sampler.
///
/// Returns the stage plus the sampled point count for reporting.
fn build_stage(
    image: &Path,
    options: SamplerOptions,
    seed: u64,
    friction: f64,
) -> Result<(Stage, usize), CliError> {
    if !(0.0..1.0).contains(&friction) {
        return Err(CliError::Input(format!(
            "friction must be in [0, 1), got {friction}"
        )));
    }
    let grid = load_image(image)?;
    let mut sampler = ImageSampler::new(options, seed)?;
    sampler.set_image(grid)?;
    let count = sampler.collection().len();

    let mut stage = Stage::new();
    stage.set_friction(friction);
    stage.add_scene(Box::new(sampler));
    Ok((stage, count))
}

/// Advances the stage one tick with the scripted pointer for that tick.
fn drive_tick(stage: &mut Stage, pixmap: &mut Pixmap, sim: &SimArgs, tick: usize) {
    let still = (
        sim.pointer_x.unwrap_or(sim.width as f64 / 2.0),
        sim.pointer_y.unwrap_or(sim.height as f64 / 2.0),
    );
    let (px, py) = pointer_position(
        sim.path,
        tick,
        sim.ticks,
        sim.width as f64,
        sim.height as f64,
        still,
    );
    stage.set_pointer(px, py);
    let viewport = pixmap.viewport();
    stage.tick(pixmap, viewport);
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render {
            image,
            sim,
            sampler,
            output,
        } => {
            let center = (sim.width as f64 / 2.0, sim.height as f64 / 2.0);
            let (mut stage, count) =
                build_stage(&image, sampler.to_options(center), sim.seed, sim.friction)?;

            let mut pixmap = Pixmap::new(sim.width, sim.height, Rgba::WHITE)?;
            for tick in 0..sim.ticks {
                drive_tick(&mut stage, &mut pixmap, &sim, tick);
            }
            write_png(&pixmap, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "image": image.display().to_string(),
                    "width": sim.width,
                    "height": sim.height,
                    "ticks": sim.ticks,
                    "seed": sim.seed,
                    "points": count,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {count} points ({}x{}, {} ticks, seed {}) -> {}",
                    sim.width,
                    sim.height,
                    sim.ticks,
                    sim.seed,
                    output.display()
                );
            }
        }
        Command::Animate {
            image,
            sim,
            sampler,
            out_dir,
        } => {
            let center = (sim.width as f64 / 2.0, sim.height as f64 / 2.0);
            let (mut stage, count) =
                build_stage(&image, sampler.to_options(center), sim.seed, sim.friction)?;

            std::fs::create_dir_all(&out_dir).map_err(|e| CliError::Io(e.to_string()))?;
            let mut pixmap = Pixmap::new(sim.width, sim.height, Rgba::WHITE)?;
            for tick in 0..sim.ticks {
                drive_tick(&mut stage, &mut pixmap, &sim, tick);
                let frame = out_dir.join(format!("frame-{tick:04}.png"));
                write_png(&pixmap, &frame)?;
            }

            if cli.json {
                let info = serde_json::json!({
                    "image": image.display().to_string(),
                    "frames": sim.ticks,
                    "points": count,
                    "out_dir": out_dir.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "animated {count} points over {} frames -> {}",
                    sim.ticks,
                    out_dir.display()
                );
            }
        }
        Command::Sample {
            image,
            sampler,
            seed,
        } => {
            let grid = load_image(&image)?;
            let mut sampler = ImageSampler::new(sampler.to_options((0.0, 0.0)), seed)?;
            sampler.set_image(grid)?;
            let collection = sampler.collection();

            if cli.json {
                let points: Vec<serde_json::Value> = collection
                    .iter()
                    .map(|p| {
                        serde_json::json!({
                            "x": p.cur_pos.x,
                            "y": p.cur_pos.y,
                            "size": p.size,
                            "colour": p.colour.to_string(),
                        })
                    })
                    .collect();
                let info = serde_json::json!({
                    "count": collection.len(),
                    "points": points,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else if collection.is_empty() {
                println!("sampled 0 points");
            } else {
                let mut min = (f64::INFINITY, f64::INFINITY);
                let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
                for p in collection.iter() {
                    min = (min.0.min(p.cur_pos.x), min.1.min(p.cur_pos.y));
                    max = (max.0.max(p.cur_pos.x), max.1.max(p.cur_pos.y));
                }
                println!("sampled {} points", collection.len());
                println!(
                    "bounds: x [{:.1}, {:.1}], y [{:.1}, {:.1}]",
                    min.0, max.0, min.1, max.1
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
