/// Integer pixel coordinate. `x` grows to the right, `y` grows upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub fn new(x: i32, y: i32) -> Self {
        PixelPoint { x, y }
    }

    /// True when the point lies strictly inside a `width` x `height` canvas.
    /// Points on the zero row or column count as outside.
    pub fn is_strictly_inside(&self, width: u32, height: u32) -> bool {
        let (x, y) = (self.x as i64, self.y as i64);
        x > 0 && x < width as i64 && y > 0 && y < height as i64
    }
}
