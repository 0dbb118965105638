#![deny(unsafe_code)]
//! CLI binary for the 2D drawing lessons.
//!
//! Subcommands:
//! - `list`: print available lessons and their sliders
//! - `render <lesson>`: plan one frame and write it as a PNG
//! - `plan <lesson>`: print one frame's draw plan as JSON
//! - `matrix`: compose a transform and show where points land in clip space

mod error;
mod logging;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use lessons2d_core::transform::{rotate, scale, translate};
use lessons2d_core::{CanvasSize, Lesson, LessonConfig, Mat3, Vec2};
use lessons2d_lessons::LessonKind;
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_WIDTH: u32 = 400;
const DEFAULT_HEIGHT: u32 = 300;

#[derive(Parser)]
#[command(name = "lessons2d", about = "2D WebGL drawing lessons, rendered offline")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

/// Which lesson to run and how; either flags or a config file.
#[derive(Args)]
struct LessonArgs {
    /// Lesson name (e.g. "transform"). Required unless --config is given.
    #[arg(required_unless_present = "config")]
    lesson: Option<String>,

    /// Canvas width in pixels.
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// PRNG seed for deterministic output.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Lesson parameters as a JSON string.
    #[arg(long, default_value = "{}")]
    params: String,

    /// Slider value as id=value; repeatable.
    #[arg(long = "slider", value_parser = parse_slider)]
    sliders: Vec<(String, f32)>,

    /// Read the whole setup from a JSON lesson config instead. Only
    /// `--slider` may be combined with it.
    #[arg(long, conflicts_with_all = ["lesson", "params", "width", "height", "seed"])]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// List available lessons and their sliders.
    List {
        /// Canvas width used for slider ranges.
        #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
        width: u32,

        /// Canvas height used for slider ranges.
        #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
        height: u32,
    },
    /// Plan one frame of a lesson and write a PNG snapshot.
    Render {
        #[command(flatten)]
        lesson: LessonArgs,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,
    },
    /// Print one frame's draw plan as JSON.
    Plan {
        #[command(flatten)]
        lesson: LessonArgs,
    },
    /// Compose projection * translate * rotate * scale and apply it.
    Matrix {
        #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
        width: u32,

        #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
        height: u32,

        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        tx: f32,

        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        ty: f32,

        /// Rotation in degrees.
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        angle: f32,

        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        sx: f32,

        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        sy: f32,

        /// Local point as x,y to map into clip space; repeatable.
        #[arg(long = "point", value_parser = parse_point, allow_hyphen_values = true)]
        points: Vec<Vec2>,
    },
}

fn parse_slider(s: &str) -> Result<(String, f32), String> {
    let (id, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected id=value, got '{s}'"))?;
    let value: f32 = value
        .trim()
        .parse()
        .map_err(|e| format!("slider '{id}': {e}"))?;
    Ok((id.trim().to_string(), value))
}

fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got '{s}'"))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("x: {e}"))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("y: {e}"))?;
    Ok(Vec2::new(x, y))
}

fn read_config(path: &Path) -> Result<LessonConfig, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("invalid config {}: {e}", path.display())))
}

impl LessonArgs {
    /// Builds the lesson config; `--slider` values override the file's.
    fn to_config(&self) -> Result<LessonConfig, CliError> {
        let mut config = match (&self.config, &self.lesson) {
            (Some(path), _) => read_config(path)?,
            (None, Some(name)) => {
                let mut config = LessonConfig::new(name, self.width, self.height, self.seed);
                config.params = serde_json::from_str(&self.params)
                    .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
                config
            }
            (None, None) => return Err(CliError::Input("no lesson or --config given".into())),
        };
        for (id, value) in &self.sliders {
            config.sliders.insert(id.clone(), *value);
        }
        Ok(config)
    }
}

/// `projection * translate * rotate * scale` for the `matrix` subcommand.
fn compose(canvas: CanvasSize, t: Vec2, angle_degrees: f32, s: Vec2) -> Mat3 {
    let m = translate(canvas.projection(), t.x, t.y);
    let m = rotate(m, angle_degrees.to_radians());
    scale(m, s.x, s.y)
}

fn format_rows(m: &Mat3) -> Vec<String> {
    (0..3)
        .map(|r| format!("{:>10.5} {:>10.5} {:>10.5}", m.get(r, 0), m.get(r, 1), m.get(r, 2)))
        .collect()
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List { width, height } => {
            let canvas = CanvasSize::new(width, height)?;
            let mut listing = Vec::new();
            for &name in LessonKind::list_lessons() {
                let lesson = LessonKind::from_name(name, 0, &serde_json::json!({}))?;
                listing.push((name, lesson.sliders(canvas)));
            }
            if cli.json {
                let info: Vec<_> = listing
                    .iter()
                    .map(|(name, sliders)| serde_json::json!({"name": name, "sliders": sliders}))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Lessons:");
                for (name, sliders) in &listing {
                    println!("  {name}");
                    for s in sliders {
                        println!(
                            "    {:<8} {} in [{}, {}] step {} (= {})",
                            s.id,
                            s.label,
                            s.min,
                            s.max,
                            s.step,
                            s.display_value()
                        );
                    }
                }
            }
        }
        Command::Render { lesson, output } => {
            let config = lesson.to_config()?;
            let canvas = config.canvas()?;
            let mut kind = LessonKind::from_config(&config)?;
            let frame = kind.frame(canvas);

            lessons2d_lessons::snapshot::write_png(&frame, canvas, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "lesson": config.lesson,
                    "width": config.width,
                    "height": config.height,
                    "seed": config.seed,
                    "draws": frame.draws.len(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} ({}x{}, {} draws, seed {}) -> {}",
                    config.lesson,
                    config.width,
                    config.height,
                    frame.draws.len(),
                    config.seed,
                    output.display()
                );
            }
        }
        Command::Plan { lesson } => {
            let config = lesson.to_config()?;
            let canvas = config.canvas()?;
            let frame = LessonKind::from_config(&config)?.frame(canvas);
            // The plan is JSON either way.
            println!("{}", serde_json::to_string_pretty(&frame)?);
        }
        Command::Matrix {
            width,
            height,
            tx,
            ty,
            angle,
            sx,
            sy,
            points,
        } => {
            let canvas = CanvasSize::new(width, height)?;
            let m = compose(canvas, Vec2::new(tx, ty), angle, Vec2::new(sx, sy));
            let mapped: Vec<(Vec2, Vec2)> =
                points.iter().map(|&p| (p, m.transform_point(p))).collect();

            if cli.json {
                let points: Vec<serde_json::Value> = mapped
                    .iter()
                    .map(|(p, c)| serde_json::json!({"local": [p.x, p.y], "clip": [c.x, c.y]}))
                    .collect();
                let info = serde_json::json!({"matrix": m, "points": points});
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for row in format_rows(&m) {
                    println!("{row}");
                }
                for (p, c) in &mapped {
                    println!("({}, {}) -> ({:.5}, {:.5})", p.x, p.y, c.x, c.y);
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        log::debug!("exiting with code {}", e.exit_code());
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
