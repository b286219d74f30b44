use crate::constants::{
    DEFAULT_GRAVITATION, DEFAULT_HEIGHT, DEFAULT_PPS, DEFAULT_WIDTH, DEFAULT_WIND_ANGLE,
    DEFAULT_WIND_FORCE, METERS_PER_PIXEL,
};
use crate::errors::SimulationError;
use crate::utils::point::PixelPoint;

/// Launch and environment settings for a single shot.
///
/// Physical quantities are kept in meters and seconds; the integrator scales
/// them to pixel space (one pixel is ten meters) when it runs.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    pub width: u32,
    pub height: u32,
    pub pps: u32,
    pub gravitation: f32, // m/s²
    pub wind_angle: f32,  // degrees
    pub wind_force: f32,  // m/s²
    pub launch_angle: f32, // degrees
    pub launch_speed: f32, // m/s
}

impl SimulationParameters {
    pub fn new(launch_angle: f32, launch_speed: f32) -> Self {
        SimulationParameters {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            pps: DEFAULT_PPS,
            gravitation: DEFAULT_GRAVITATION,
            wind_angle: DEFAULT_WIND_ANGLE,
            wind_force: DEFAULT_WIND_FORCE,
            launch_angle,
            launch_speed,
        }
    }

    /// Checks the preconditions the integrator and renderer rely on.
    pub fn validate(&self) -> Result<(), SimulationError> {
        // Written this way so NaN is rejected as well.
        if !(self.launch_speed > 0.0) {
            return Err(SimulationError::InvalidSpeed(self.launch_speed));
        }
        if self.width == 0 || self.height == 0 {
            return Err(SimulationError::InvalidParameter(format!(
                "resolution must be positive, got {}:{}",
                self.width, self.height
            )));
        }
        if self.pps == 0 {
            return Err(SimulationError::InvalidParameter(
                "pps must be > 0".to_string(),
            ));
        }
        if !self.gravitation.is_finite()
            || !self.wind_force.is_finite()
            || !self.wind_angle.is_finite()
            || !self.launch_angle.is_finite()
            || !self.launch_speed.is_finite()
        {
            return Err(SimulationError::InvalidParameter(
                "physical parameters must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Time between two trajectory samples, in seconds.
    pub fn time_step(&self) -> f32 {
        1.0 / self.pps as f32
    }

    /// Fixed launch point: the canvas center.
    pub fn launch_point(&self) -> PixelPoint {
        PixelPoint::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    pub fn launch_speed_pixels(&self) -> f32 {
        self.launch_speed / METERS_PER_PIXEL
    }

    pub fn wind_force_pixels(&self) -> f32 {
        self.wind_force / METERS_PER_PIXEL
    }

    /// Gravitational acceleration in pixel space, pointing down.
    pub fn gravity_pixels(&self) -> f32 {
        -self.gravitation / METERS_PER_PIXEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let params = SimulationParameters::new(45.0, 50.0);
        assert_eq!(params.width, 320);
        assert_eq!(params.height, 320);
        assert_eq!(params.pps, 5);
        assert_relative_eq!(params.gravitation, 9.798);
        assert_eq!(params.wind_angle, 0.0);
        assert_eq!(params.wind_force, 0.0);
        assert_eq!(params.launch_point(), PixelPoint::new(160, 160));
    }

    #[test]
    fn test_pixel_scaling() {
        let mut params = SimulationParameters::new(30.0, 120.0);
        params.wind_force = 4.0;
        assert_relative_eq!(params.launch_speed_pixels(), 12.0);
        assert_relative_eq!(params.wind_force_pixels(), 0.4);
        assert_relative_eq!(params.gravity_pixels(), -0.9798);
        assert_relative_eq!(params.time_step(), 0.2);
    }

    #[test]
    fn test_validate_rejects_non_positive_speed() {
        for speed in [0.0, -1.0, f32::NAN] {
            let params = SimulationParameters::new(45.0, speed);
            assert!(matches!(
                params.validate(),
                Err(SimulationError::InvalidSpeed(_))
            ));
        }
    }

    #[test]
    fn test_validate_rejects_degenerate_canvas() {
        let mut params = SimulationParameters::new(45.0, 50.0);
        params.height = 0;
        assert!(matches!(
            params.validate(),
            Err(SimulationError::InvalidParameter(_))
        ));

        let mut params = SimulationParameters::new(45.0, 50.0);
        params.pps = 0;
        assert!(params.validate().is_err());

        assert!(SimulationParameters::new(45.0, 50.0).validate().is_ok());
    }
}
