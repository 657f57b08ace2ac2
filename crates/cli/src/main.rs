#![deny(unsafe_code)]
//! CLI binary for color-fusion.
//!
//! Subcommands:
//! - `blend <first> <second>` — print the blended colors
//! - `inspect <first> <second>` — print details for one swatch
//! - `render <first> <second>` — print canvas draw commands
//! - `export <first> <second>` — write a 2160×2160 PNG
//! - `random` — print random colors

mod error;

use clap::{Args, Parser, Subcommand};
use color_fusion_core::color::{FIRST_PLACEHOLDER, SECOND_PLACEHOLDER};
use color_fusion_core::{Color, GradientSpec, RenderMode, Xorshift64};
use color_fusion_render::session::decode_input;
use color_fusion_render::{DrawCommand, Frame, FusionSession, SwatchDetails, EXPORT_SIZE};
use error::CliError;
use serde_json::Value;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "color_fusion=info";

#[derive(Parser)]
#[command(name = "color-fusion", about = "Blend two colors into a gradient")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log filter directive, e.g. "color_fusion=debug". `RUST_LOG` also applies.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Gradient options as a JSON object (`steps`, `mode`, `separations`).
    #[arg(long, global = true, default_value = "{}")]
    params: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct GradientArgs {
    /// First color hex code (e.g. "#1E90FF").
    first: String,

    /// Second color hex code.
    second: String,

    /// Number of intermediate colors.
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(0..=64))]
    steps: u64,
}

#[derive(Subcommand)]
enum Command {
    /// Print the gradient's colors, left to right.
    Blend {
        #[command(flatten)]
        gradient: GradientArgs,
    },
    /// Show hex, RGB, HSL, and contrast colors for one swatch.
    Inspect {
        #[command(flatten)]
        gradient: GradientArgs,

        /// Swatch index (0 is the first color).
        #[arg(long, conflicts_with = "click_x")]
        index: Option<usize>,

        /// Horizontal click position on the canvas.
        #[arg(long)]
        click_x: Option<f64>,

        /// Canvas width the click position refers to.
        #[arg(long, default_value_t = 500.0)]
        canvas_width: f64,
    },
    /// Print the rectangles that draw the gradient on a canvas.
    Render {
        #[command(flatten)]
        gradient: GradientArgs,

        /// Band style: "separated" or "seamless".
        #[arg(short, long, default_value = "separated")]
        mode: String,

        /// Canvas width.
        #[arg(short = 'W', long, default_value_t = 500.0)]
        width: f64,

        /// Canvas height.
        #[arg(short = 'H', long, default_value_t = 200.0)]
        height: f64,
    },
    /// Write the gradient as a 2160×2160 PNG.
    Export {
        #[command(flatten)]
        gradient: GradientArgs,

        /// Output file path. Defaults to "<hex1>_fused_with_<hex2>.png".
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print random colors.
    Random {
        /// PRNG seed for reproducible output. Defaults to the clock.
        #[arg(long)]
        seed: Option<u64>,

        /// How many colors to print.
        #[arg(short = 'n', long, default_value_t = 2)]
        count: usize,
    },
}

/// Builds a session from the arguments, rejecting invalid colors and
/// out-of-range `--params` steps up front.
///
/// The interactive fallback to the last valid gradient does not apply here:
/// a one-shot command has no previous gradient worth showing.
fn session_for(
    args: &GradientArgs,
    mode: RenderMode,
    params: &Value,
) -> Result<FusionSession, CliError> {
    let start = decode_input(&args.first, FIRST_PLACEHOLDER)?;
    let end = decode_input(&args.second, SECOND_PLACEHOLDER)?;
    let spec = GradientSpec::new(start, end, args.steps as usize)?
        .with_mode(mode)
        .with_overrides(params)?;
    Ok(FusionSession::with_inputs(
        args.first.as_str(),
        args.second.as_str(),
        spec.steps(),
        spec.mode(),
    ))
}

/// Resolves `--index` or `--click-x` to one swatch.
fn pick_swatch(
    session: &FusionSession,
    index: Option<usize>,
    click_x: Option<f64>,
    canvas_width: f64,
) -> Result<SwatchDetails, CliError> {
    match (index, click_x) {
        (Some(i), _) => {
            let blended = session.spec()?.gradient();
            SwatchDetails::from_gradient(&blended, i).ok_or_else(|| {
                CliError::Input(format!(
                    "swatch index {i} out of range (gradient has {} colors)",
                    blended.len()
                ))
            })
        }
        (None, Some(x)) => session
            .click(x, canvas_width)
            .ok_or_else(|| CliError::Input("no gradient to inspect".into())),
        (None, None) => Err(CliError::Input("pass either --index or --click-x".into())),
    }
}

fn draw_commands(
    session: &FusionSession,
    width: f64,
    height: f64,
) -> Result<Vec<DrawCommand>, CliError> {
    match session.render(width, height) {
        Frame::Strip(commands) => Ok(commands),
        Frame::Message { text, .. } => Err(CliError::Input(text)),
    }
}

fn random_colors(seed: Option<u64>, count: usize) -> Vec<Color> {
    let mut rng = seed.map_or_else(Xorshift64::from_clock, Xorshift64::new);
    (0..count).map(|_| Color::random(&mut rng)).collect()
}

fn print_details(details: &SwatchDetails, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(details)?);
    } else {
        for label in details.labels() {
            println!("{label}");
        }
        println!("Text: {}", details.text_color);
        println!("Button: {}", details.button_color);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let params: Value = serde_json::from_str(&cli.params)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;

    match cli.command {
        Command::Blend { gradient } => {
            let session = session_for(&gradient, RenderMode::default(), &params)?;
            let spec = session.spec()?;
            let blended = spec.gradient();
            if cli.json {
                let info = serde_json::json!({
                    "start": spec.start(),
                    "end": spec.end(),
                    "steps": spec.steps(),
                    "colors": blended,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for (i, color) in blended.iter().enumerate() {
                    println!("{i:>2}  {color}");
                }
            }
        }
        Command::Inspect {
            gradient,
            index,
            click_x,
            canvas_width,
        } => {
            let session = session_for(&gradient, RenderMode::default(), &params)?;
            let details = pick_swatch(&session, index, click_x, canvas_width)?;
            print_details(&details, cli.json)?;
        }
        Command::Render {
            gradient,
            mode,
            width,
            height,
        } => {
            let mode = RenderMode::from_name(&mode).ok_or_else(|| {
                CliError::Input(format!(
                    "unknown mode '{mode}' (expected separated or seamless)"
                ))
            })?;
            let session = session_for(&gradient, mode, &params)?;
            let commands = draw_commands(&session, width, height)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&commands)?);
            } else {
                for c in &commands {
                    println!(
                        "rect {:.2},{:.2} {:.2},{:.2} fill={} outline={}",
                        c.x0, c.y0, c.x1, c.y1, c.fill, c.outline
                    );
                }
            }
        }
        Command::Export { gradient, output } => {
            let session = session_for(&gradient, RenderMode::default(), &params)?;
            let output = match output {
                Some(path) => path,
                None => PathBuf::from(session.default_export_filename()?),
            };
            session.export(&output)?;
            if cli.json {
                let spec = session.spec()?;
                let info = serde_json::json!({
                    "first": spec.start(),
                    "second": spec.end(),
                    "steps": spec.steps(),
                    "size": EXPORT_SIZE,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!("exported gradient -> {}", output.display());
            }
        }
        Command::Random { seed, count } => {
            let colors = random_colors(seed, count);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&colors)?);
            } else {
                for color in colors {
                    println!("{color}");
                }
            }
        }
    }

    Ok(())
}

fn init_logging(level: Option<&str>) {
    let directive: Directive = level
        .unwrap_or(DEFAULT_LOG_DIRECTIVE)
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());
    tracing::debug!("color-fusion v{} starting", env!("CARGO_PKG_VERSION"));
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
