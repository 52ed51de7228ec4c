//! gesture_replay: run a recorded landmark trace through the interpreter
//! and print the model transform after every frame.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use gesture_interp::{replay, GestureConfig, GestureInterpreter, ReplayError, Trace};
use log::info;

#[derive(Parser, Debug)]
#[command(version, about = "Replay a hand-landmark trace through the gesture interpreter")]
struct Args {
    /// JSON trace: { "frame": {width, height}, "frames": [ landmarks | null, ... ] }
    trace: PathBuf,
    /// Optional JSON file overriding interpreter tuning constants.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print only the final transform.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ReplayError> {
    let config = match &args.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => GestureConfig::default(),
    };
    let trace = Trace::load(&args.trace)?;
    info!(
        "replaying {} frames at {}x{}",
        trace.frames.len(), trace.frame.width, trace.frame.height
    );

    let frames = replay(&GestureInterpreter::new(config), &trace);
    if args.quiet {
        if let Some(last) = frames.last() {
            println!("{}", last.summary());
        }
    } else {
        for f in &frames {
            println!("{}", f.summary());
        }
    }

    let seen = frames.iter().filter(|f| f.report.is_some()).count();
    info!("{} of {} frames had a hand", seen, frames.len());
    Ok(())
}
