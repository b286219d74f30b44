use crate::constants::{BARREL_COLOR, BASE_COLOR, GROUND_COLOR, SKY_COLOR, TRAJECTORY_COLOR};
use crate::control::parameters::SimulationParameters;
use crate::render_system::canvas::{Canvas, Color};
use crate::trajectory_system::integrator::TrajectoryPoints;
use crate::utils::point::PixelPoint;
use crate::utils::vector2d::Vector2D;

/// Pixel geometry of the cannon graphic for a given launch angle.
///
/// Every position is measured from the canvas center and truncated toward
/// zero, so corners may land on or past the canvas border.
#[derive(Debug, Clone, PartialEq)]
pub struct CannonGeometry {
    pub ground: [PixelPoint; 2],
    pub barrel: [PixelPoint; 2],
    pub barrel_thickness: u32,
    pub base: [PixelPoint; 2],
    pub muzzle: [PixelPoint; 2],
    pub muzzle_thickness: u32,
}

impl CannonGeometry {
    pub fn new(params: &SimulationParameters) -> Self {
        let heading = Vector2D::heading(params.launch_angle);
        let w = params.width as f64;
        let h = params.height as f64;
        let center_x = (params.width / 2) as i32;
        let center_y = (params.height / 2) as i32;

        // The ground line is measured from half the width, on both axes.
        let ground_top = (center_x as f64 - heading.y * w / 12.0) as i32;
        let ground = [
            PixelPoint::new(0, ground_top),
            PixelPoint::new(params.width as i32, 0),
        ];

        let breech = PixelPoint::new(
            (center_x as f64 - heading.x * w / 8.0) as i32,
            (center_y as f64 - heading.y * w / 8.0) as i32,
        );
        let barrel = [breech, PixelPoint::new(center_x, center_y)];
        let barrel_thickness = params.width / 24;

        let inset = (params.width / 32) as i32;
        let base = [
            PixelPoint::new(breech.x.saturating_sub(inset), breech.y),
            PixelPoint::new(
                center_x.saturating_add(inset),
                breech.y.saturating_sub(barrel_thickness as i32),
            ),
        ];

        let muzzle = [
            PixelPoint::new(
                (center_x as f64 + heading.y * w / 38.0) as i32,
                (center_y as f64 - heading.x * h / 64.0) as i32,
            ),
            PixelPoint::new(
                (center_x as f64 - heading.y * w / 48.0) as i32,
                (center_y as f64 + heading.x * h / 24.0) as i32,
            ),
        ];

        CannonGeometry {
            ground,
            barrel,
            barrel_thickness,
            base,
            muzzle,
            muzzle_thickness: params.width / 48,
        }
    }
}

/// Paints sky, ground, cannon and trajectory, each layer over the previous.
pub fn render(canvas: &mut Canvas, params: &SimulationParameters, trajectory: &TrajectoryPoints) {
    let cannon = CannonGeometry::new(params);

    canvas.fill(Color(SKY_COLOR));
    canvas.draw_rectangle(cannon.ground[0], cannon.ground[1], Color(GROUND_COLOR));
    canvas.draw_polyline(&cannon.barrel, cannon.barrel_thickness, Color(BARREL_COLOR));
    canvas.draw_rectangle(cannon.base[0], cannon.base[1], Color(BASE_COLOR));
    canvas.draw_polyline(&cannon.muzzle, cannon.muzzle_thickness, Color(BARREL_COLOR));
    canvas.draw_polyline(trajectory.points(), 0, Color(TRAJECTORY_COLOR));
}
