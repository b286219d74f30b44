use crate::constants::TRAJECTORY_GROWTH_STEP;
use crate::control::parameters::SimulationParameters;
use crate::errors::SimulationError;
use crate::utils::point::PixelPoint;
use crate::utils::vector2d::Vector2D;

/// Pixel positions of the projectile, one per time step.
///
/// Index 0 is the launch point. The sequence ends one sample after the
/// first point that is no longer strictly inside the canvas, so the line
/// drawing always has a segment that crosses the border.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryPoints {
    points: Vec<PixelPoint>,
    time_step: f32,
}

impl TrajectoryPoints {
    pub fn points(&self) -> &[PixelPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PixelPoint> {
        self.points.iter()
    }

    pub fn launch_point(&self) -> Option<PixelPoint> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<PixelPoint> {
        self.points.last().copied()
    }

    pub fn time_step(&self) -> f32 {
        self.time_step
    }

    /// Simulated time of sample `index`, in seconds.
    pub fn sample_time(&self, index: usize) -> f32 {
        self.time_step * index as f32
    }
}

/// Samples the closed-form projectile motion under constant gravity and wind.
///
/// Runs until the projectile has left the canvas; the only runtime failure
/// is running out of memory for the point buffer.
pub fn simulate(params: &SimulationParameters) -> Result<TrajectoryPoints, SimulationError> {
    params.validate()?;

    let origin = params.launch_point();
    let (v_x, v_y) =
        (Vector2D::heading(params.launch_angle) * params.launch_speed_pixels() as f64).to_f32();
    let (w_x, w_y) =
        (Vector2D::heading(params.wind_angle) * params.wind_force_pixels() as f64).to_f32();
    let g = params.gravity_pixels();
    let dt = params.time_step();

    let mut points = Vec::new();
    grow(&mut points)?;
    points.push(origin);

    loop {
        let k = points.len();
        if k == points.capacity() {
            grow(&mut points)?;
        }

        let t = dt * k as f32;
        let x = origin.x as f32 + v_x * t + w_x * t * t / 2.0;
        let y = origin.y as f32 + v_y * t + g * t * t / 2.0 + w_y * t * t / 2.0;
        points.push(PixelPoint::new(round_half_up(x), round_half_up(y)));

        // Checked on the previous sample: the loop computes one point past the border.
        if !points[k - 1].is_strictly_inside(params.width, params.height) {
            break;
        }
    }

    Ok(TrajectoryPoints {
        points,
        time_step: dt,
    })
}

fn grow(points: &mut Vec<PixelPoint>) -> Result<(), SimulationError> {
    points
        .try_reserve(TRAJECTORY_GROWTH_STEP)
        .map_err(|e| {
            SimulationError::ResourceExhausted(format!(
                "growing trajectory beyond {} points: {}",
                points.len(),
                e
            ))
        })
}

/// Adds one half and truncates toward zero; rounds to nearest for
/// non-negative values. Saturates at the `i32` range.
fn round_half_up(value: f32) -> i32 {
    (value as f64 + 0.5) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(angle: f32, speed: f32) -> SimulationParameters {
        SimulationParameters::new(angle, speed)
    }

    #[test]
    fn test_default_shot_rises_then_falls() {
        let trajectory = simulate(&params(45.0, 50.0)).unwrap();
        let points = trajectory.points();

        assert_eq!(points[0], PixelPoint::new(160, 160));
        assert!(trajectory.len() > 1);
        assert!(points.windows(2).all(|w| w[1].x >= w[0].x));
        assert!(points.last().unwrap().x > points[0].x);

        let apex = points.iter().map(|p| p.y).max().unwrap();
        assert!(apex > 160);
        assert!(points.last().unwrap().y < apex);

        let last = trajectory.last().unwrap();
        let on_canvas = |v: i32| (0..320).contains(&v);
        assert!(!on_canvas(last.x) || !on_canvas(last.y));
    }

    #[test]
    fn test_one_step_overshoot() {
        let trajectory = simulate(&params(60.0, 80.0)).unwrap();
        let points = trajectory.points();
        let n = points.len();
        assert!(n >= 3);

        assert!(points[..n - 2]
            .iter()
            .all(|p| p.is_strictly_inside(320, 320)));
        assert!(!points[n - 2].is_strictly_inside(320, 320));
    }

    #[test]
    fn test_straight_line_without_forces() {
        let mut p = params(30.0, 100.0);
        p.gravitation = 0.0;
        let trajectory = simulate(&p).unwrap();

        let (sin, cos) = (30.0_f64.to_radians().sin(), 30.0_f64.to_radians().cos());
        for point in trajectory.iter() {
            let dx = (point.x - 160) as f64;
            let dy = (point.y - 160) as f64;
            // Distance from the ideal ray, allowing for the integer rounding.
            assert!((dx * sin - dy * cos).abs() <= 1.0, "{:?} strays off the ray", point);
            assert!(dx >= 0.0 && dy >= 0.0);
        }
    }

    #[test]
    fn test_time_step_is_constant() {
        let mut p = params(45.0, 50.0);
        p.pps = 8;
        let trajectory = simulate(&p).unwrap();
        assert_relative_eq!(trajectory.time_step(), 0.125);
        for k in 0..trajectory.len() {
            assert_eq!(trajectory.sample_time(k), 0.125 * k as f32);
        }
    }

    #[test]
    fn test_terminates_across_inputs() {
        for angle in [-90.0, -45.0, 0.0, 10.0, 45.0, 89.0, 90.0, 135.0, 180.0, 270.0] {
            for speed in [0.5, 10.0, 50.0, 400.0, 5000.0] {
                for gravitation in [0.0, 1.62, 9.798, 24.79] {
                    let mut p = params(angle, speed);
                    p.gravitation = gravitation;
                    if gravitation == 0.0 && speed < 1.0 {
                        continue;
                    }
                    let trajectory = simulate(&p).unwrap();
                    assert!(trajectory.len() >= 2);
                }
            }
        }
    }

    #[test]
    fn test_wind_pushes_vertical_shot_sideways() {
        let calm = simulate(&params(90.0, 50.0)).unwrap();
        assert!(calm.iter().all(|p| p.x == 160));

        let mut windy = params(90.0, 50.0);
        windy.wind_angle = 0.0;
        windy.wind_force = 2.0;
        let drifted = simulate(&windy).unwrap();
        assert!(drifted.last().unwrap().x > 160);
        assert_eq!(drifted.launch_point(), Some(PixelPoint::new(160, 160)));
    }

    #[test]
    fn test_high_sample_rate_runs_to_the_border() {
        let mut p = params(90.0, 50.0);
        p.pps = 60_000;
        let trajectory = simulate(&p).unwrap();

        assert!(trajectory.len() > 1_000_000);
        let last = trajectory.last().unwrap();
        assert!(!last.is_strictly_inside(p.width, p.height));
        assert!(trajectory.points()[..trajectory.len() - 2]
            .iter()
            .all(|point| point.is_strictly_inside(p.width, p.height)));
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        assert!(matches!(
            simulate(&params(45.0, 0.0)),
            Err(SimulationError::InvalidSpeed(_))
        ));
    }

    #[test]
    fn test_growth_keeps_every_sample() {
        let mut p = params(45.0, 50.0);
        p.pps = 50;
        let trajectory = simulate(&p).unwrap();
        assert!(trajectory.len() > TRAJECTORY_GROWTH_STEP * 10);
        assert_eq!(trajectory.points()[0], p.launch_point());
    }
}
