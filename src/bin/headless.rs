use clap::Parser;
use std::{path::PathBuf, time::Duration};

use drone_flight::{
    components::{CameraToggle, ControlKey},
    resources::FlightConfig,
    utils::{SimError, REFERENCE_DT},
    FlightSim,
};

/// Fly the drone core without a window and report where it ended up.
#[derive(Parser, Debug)]
#[command(name = "drone_headless", about = "Headless drone flight run", long_about = None)]
struct Args {
    /// Flight configuration (.yaml, .yml or .json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ticks to simulate at 60 Hz
    #[arg(long, default_value_t = 120)]
    ticks: usize,

    /// Autopilot goal: heading change [rad] then distance
    #[arg(
        long,
        num_args = 2,
        value_names = ["HEADING", "DISTANCE"],
        allow_negative_numbers = true
    )]
    goal: Option<Vec<f64>>,

    /// Vision client reply, e.g. '{"bounding_box": [ymin, xmin, ymax, xmax]}'
    #[arg(long)]
    detection: Option<String>,

    /// Distance to travel toward a detected target
    #[arg(long, default_value_t = 1.0)]
    detection_distance: f64,

    /// Control held for the whole run (w, s, a, d, i, k, j, l, ArrowUp, ...)
    #[arg(long = "hold", value_name = "KEY")]
    held: Vec<ControlKey>,

    /// Camera view to toggle on (firstPerson or ventral)
    #[arg(long)]
    view: Option<CameraToggle>,

    /// Write the latest captured frame here
    #[arg(long)]
    frame: Option<PathBuf>,

    /// Skip installing the log subscriber
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

/// What a run produced.
struct RunReport {
    sim: FlightSim,
    frame_written: Option<u64>,
}

fn run(args: &Args) -> Result<RunReport, SimError> {
    let config = match &args.config {
        Some(path) => FlightConfig::from_file(path)?,
        None => FlightConfig::default(),
    };
    let mut builder = FlightSim::builder().with_config(config);
    if !args.quiet {
        builder = builder.with_logging();
    }
    let mut sim = builder.build()?;

    for key in &args.held {
        sim.set_key(*key, true);
    }
    if let Some(toggle) = args.view {
        sim.toggle_camera_view(toggle);
    }
    if let Some(goal) = &args.goal {
        if let [heading, distance] = goal.as_slice() {
            sim.issue_autopilot_goal(*heading, *distance);
        }
    }
    if let Some(detection) = &args.detection {
        sim.issue_goal_from_detection(detection, args.detection_distance)?;
    }

    sim.run(args.ticks, REFERENCE_DT);

    let mut frame_written = None;
    if let Some(path) = &args.frame {
        match sim.wait_for_capture(Duration::from_secs(2)) {
            Some(frame) => {
                frame.write_to(path)?;
                frame_written = Some(frame.sequence);
            }
            None => eprintln!("No frame captured"),
        }
    }

    Ok(RunReport { sim, frame_written })
}

fn main() -> Result<(), SimError> {
    let args = Args::parse();
    let report = run(&args)?;

    println!("{}", serde_json::to_string_pretty(&report.sim.telemetry())?);
    if let (Some(sequence), Some(path)) = (report.frame_written, &args.frame) {
        println!("Wrote frame {} to {}", sequence, path.display());
    }
    Ok(())
}
