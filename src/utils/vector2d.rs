use std::ops::Mul;

use crate::constants::DEGREES_PER_RADIAN;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    /// Unit vector pointing `angle_deg` degrees above the positive x axis.
    ///
    /// The vertical component is taken as the cosine of the complementary
    /// angle, and the complement is formed in single precision before the
    /// conversion to radians. Both the integrator and the cannon drawing
    /// depend on these exact values.
    pub fn heading(angle_deg: f32) -> Self {
        let complement = 90.0_f32 - angle_deg;
        Vector2D::new(
            (angle_deg as f64 / DEGREES_PER_RADIAN).cos(),
            (complement as f64 / DEGREES_PER_RADIAN).cos(),
        )
    }

    pub fn magnitude(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }

    /// Components narrowed to single precision.
    pub fn to_f32(self) -> (f32, f32) {
        (self.x as f32, self.y as f32)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }
}
