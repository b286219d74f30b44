use std::path::PathBuf;

use tracing::{debug, info};

use crate::bitmap_system::encoder::BitmapEncoder;
use crate::control::parameters::SimulationParameters;
use crate::errors::SimulationError;
use crate::render_system::canvas::Canvas;
use crate::render_system::scene::render;
use crate::telemetry_system::telemetry::Telemetry;
use crate::trajectory_system::integrator::{simulate, TrajectoryPoints};

/// One shot: parameters in, bitmap file out.
#[derive(Debug, Clone)]
pub struct Mission {
    pub params: SimulationParameters,
    pub output: PathBuf,
    pub encoder: BitmapEncoder,
}

#[derive(Debug, Clone)]
pub struct MissionOutcome {
    pub trajectory: TrajectoryPoints,
    pub telemetry: Telemetry,
    pub bytes_written: usize,
}

impl Mission {
    pub fn new(params: SimulationParameters, output: impl Into<PathBuf>) -> Self {
        Mission {
            params,
            output: output.into(),
            encoder: BitmapEncoder::new(),
        }
    }

    pub fn with_encoder(mut self, encoder: BitmapEncoder) -> Self {
        self.encoder = encoder;
        self
    }

    /// Simulates, renders and writes the bitmap. Parameters are checked
    /// before anything else, so an invalid shot never touches the output path.
    pub fn run(&self) -> Result<MissionOutcome, SimulationError> {
        self.params.validate()?;

        debug!(
            angle = self.params.launch_angle,
            speed = self.params.launch_speed,
            pps = self.params.pps,
            "simulating trajectory"
        );
        let trajectory = simulate(&self.params)?;
        info!("trajectory computed with {} points", trajectory.len());
        let telemetry = Telemetry::from_trajectory(&self.params, &trajectory);

        debug!(
            width = self.params.width,
            height = self.params.height,
            "rendering scene"
        );
        let mut canvas = Canvas::new(self.params.width, self.params.height)?;
        render(&mut canvas, &self.params, &trajectory);

        let header = self.encoder.header(&canvas)?;
        debug!(alignment = ?self.encoder.alignment(), "encoding bitmap");
        self.encoder.write_file(&canvas, &self.output)?;
        info!(
            "wrote {} ({} bytes)",
            self.output.display(),
            header.file_size
        );

        Ok(MissionOutcome {
            trajectory,
            telemetry,
            bytes_written: header.file_size as usize,
        })
    }
}
