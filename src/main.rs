use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use cannon_simulation::*;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::{error, warn};

#[derive(Parser)]
#[command(name = "cannon")]
#[command(version)]
#[command(about = "Simulates a cannon shot and renders its trajectory into a bitmap", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Launch angle (degrees)
    angle: f32,

    /// Launch speed (m/s), must be > 0
    speed: f32,

    /// Output bitmap file
    output: PathBuf,

    /// Optional configuration file (wind, resolution, pps, gravitation)
    config: Option<PathBuf>,

    /// Pad pixel rows to four bytes instead of packing them
    #[arg(long)]
    pad_rows: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    let mut params = SimulationParameters::new(cli.angle, cli.speed);
    match &cli.config {
        Some(path) => {
            load_config(path, &mut params);
        }
        None => warn!("no config file found - using default values"),
    }

    let alignment = if cli.pad_rows {
        RowAlignment::FourByte
    } else {
        RowAlignment::Packed
    };
    let mission = Mission::new(params, cli.output)
        .with_encoder(BitmapEncoder::with_alignment(alignment));

    match mission.run() {
        Ok(outcome) => {
            outcome.telemetry.display_data();
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
