use anyhow::Context;
use clap::{ArgAction, Parser};
use std::fs;
use std::path::PathBuf;

use strokepad::config::Config;
use strokepad::draw::Canvas;
use strokepad::{export, replay};

#[derive(Parser, Debug)]
#[command(name = "strokepad")]
#[command(
    version,
    about = "Freehand sketch canvas with gradient strokes, stamp glyphs, and undo"
)]
struct Cli {
    /// Replay a JSON event script onto the canvas
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write the rendered canvas to this PNG path
    /// (default: timestamped file in the export directory)
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Canvas width in pixels (overrides config)
    #[arg(long, value_name = "PIXELS")]
    width: Option<u32>,

    /// Canvas height in pixels (overrides config)
    #[arg(long, value_name = "PIXELS")]
    height: Option<u32>,

    /// Load configuration from this file instead of the default location
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created default config at {}", path.display());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(width) = cli.width {
        config.canvas.width = width.clamp(16, 8192);
    }
    if let Some(height) = cli.height {
        config.canvas.height = height.clamp(16, 8192);
    }

    let Some(script_path) = &cli.script else {
        // No flags: show usage
        println!("strokepad: Freehand sketch canvas with gradient strokes and stamp glyphs");
        println!();
        println!("Usage:");
        println!("  strokepad --script events.json            Replay a recorded session");
        println!("  strokepad --script events.json -o out.png Replay and write to a path");
        println!("  strokepad --init-config                   Write a default config file");
        println!("  strokepad --help                          Show help");
        println!();
        println!("Script events:");
        println!("  press/motion/release   Freehand stroke capture");
        println!("  toggle_cone/toggle_disc Stamp placement modes");
        println!("  set_dashed             Dashed stroke style");
        println!("  undo/clear             Remove committed shapes");
        return Ok(());
    };

    let json = fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read script from {}", script_path.display()))?;
    let events = replay::parse_script(&json)
        .with_context(|| format!("Failed to parse script from {}", script_path.display()))?;

    let mut state = config.session_state();
    let mut canvas = Canvas::new(
        config.canvas.width,
        config.canvas.height,
        config.canvas.background.to_color(),
        config.stroke_theme(),
        config.drawing.provisional_color.to_color(),
    )?;

    replay::run_script(&mut state, &mut canvas, &events)?;

    let written = match &cli.output {
        Some(path) => {
            export::export_canvas_to(&mut canvas, path)?;
            path.clone()
        }
        None => export::export_canvas(&mut canvas, &export::ExportConfig::default())?,
    };
    println!("Wrote {}", written.display());

    Ok(())
}
