use tracing::info;

use crate::constants::METERS_PER_PIXEL;
use crate::control::parameters::SimulationParameters;
use crate::trajectory_system::integrator::TrajectoryPoints;
use crate::utils::point::PixelPoint;

/// Flight summary of a computed trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct Telemetry {
    pub sample_count: usize,
    pub time_step: f32,
    /// First sample that is no longer strictly inside the canvas.
    pub exit_sample: Option<usize>,
    pub flight_time: f32,
    pub launch_point: PixelPoint,
    pub apex: PixelPoint,
    pub max_height: f32,       // m above the launch point
    pub horizontal_range: f32, // m from the launch point to the exit sample
}

impl Telemetry {
    pub fn from_trajectory(params: &SimulationParameters, trajectory: &TrajectoryPoints) -> Self {
        let launch_point = trajectory
            .launch_point()
            .unwrap_or_else(|| params.launch_point());
        let points = trajectory.points();

        let exit_sample = points
            .iter()
            .position(|p| !p.is_strictly_inside(params.width, params.height));
        let last_tracked = exit_sample
            .and_then(|i| points.get(i))
            .or(points.last())
            .copied()
            .unwrap_or(launch_point);

        // Earliest sample at the greatest height.
        let apex = points
            .iter()
            .copied()
            .fold(launch_point, |best, p| if p.y > best.y { p } else { best });

        Telemetry {
            sample_count: points.len(),
            time_step: trajectory.time_step(),
            exit_sample,
            flight_time: trajectory.sample_time(exit_sample.unwrap_or(points.len().saturating_sub(1))),
            launch_point,
            apex,
            max_height: (apex.y - launch_point.y) as f32 * METERS_PER_PIXEL,
            horizontal_range: (last_tracked.x - launch_point.x) as f32 * METERS_PER_PIXEL,
        }
    }

    fn format_time(elapsed_time: f32) -> String {
        if elapsed_time >= 3600.0 {
            let hours = (elapsed_time / 3600.0).floor();
            let minutes = ((elapsed_time % 3600.0) / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}h {:.0}m {:.2}s", hours, minutes, seconds)
        } else if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_distance(distance: f32) -> String {
        if distance.abs() >= 1000.0 {
            format!("{:.2} km", distance / 1000.0)
        } else {
            format!("{:.0} m", distance)
        }
    }

    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!(
                "Samples: {} (every {})",
                self.sample_count,
                Self::format_time(self.time_step)
            ),
            format!("Flight time on canvas: {}", Self::format_time(self.flight_time)),
            format!(
                "Apex: x = {} px, y = {} px ({} above launch)",
                self.apex.x,
                self.apex.y,
                Self::format_distance(self.max_height)
            ),
            format!(
                "Horizontal range: {}",
                Self::format_distance(self.horizontal_range)
            ),
        ]
    }

    pub fn display_data(&self) {
        info!("--- Flight Summary ---");
        for line in self.summary_lines() {
            info!("{}", line);
        }
    }
}
