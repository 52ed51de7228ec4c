//! hand_view: interactive entry point.

use std::path::PathBuf;

use clap::Parser;
use hand_view::app::{run, AppConfig, AppError};
use hand_view::model::MeshKind;
use log::{error, info};

#[derive(Parser, Debug)]
#[command(version, about = "Drive a 3D model with hand gestures")]
struct Args {
    /// TOML config file; unset keys keep their defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Detector frame width in pixels.
    #[arg(long)]
    frame_width: Option<f32>,
    /// Detector frame height in pixels.
    #[arg(long)]
    frame_height: Option<f32>,
    /// Built-in mesh to show.
    #[arg(long, value_parser = parse_mesh)]
    mesh: Option<MeshKind>,
    /// Skip the spin shown after the model loads.
    #[arg(long)]
    no_intro: bool,
}

fn parse_mesh(s: &str) -> Result<MeshKind, String> {
    match s.to_ascii_lowercase().as_str() {
        "cube"  => Ok(MeshKind::Cube),
        "spiky" => Ok(MeshKind::Spiky),
        other   => Err(format!("unknown mesh '{}' (cube, spiky)", other)),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║          Hand View — gesture-driven model controller         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    #[cfg(feature = "leap")]
    println!("  Mode: LeapMotion hardware");
    #[cfg(not(feature = "leap"))]
    println!("  Mode: Simulated hand  (use --features leap for hardware)");
    println!();

    if let Err(e) = configure(&args).and_then(run) {
        error!("{}", e);
        eprintln!("Error initializing app: {}", e);
        std::process::exit(1);
    }
}

fn configure(args: &Args) -> Result<AppConfig, AppError> {
    let mut cfg = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None       => AppConfig::default(),
    };
    if let Some(w) = args.frame_width  { cfg.frame_width  = w; }
    if let Some(h) = args.frame_height { cfg.frame_height = h; }
    if let Some(m) = args.mesh         { cfg.mesh = m; }
    if args.no_intro                   { cfg.intro_spin = false; }

    info!(
        "frame {}x{}, mesh {:?}, pinch < {}px, openness band {}px",
        cfg.frame_width, cfg.frame_height, cfg.mesh,
        cfg.gesture.pinch_threshold, cfg.gesture.openness_band,
    );
    Ok(cfg)
}
