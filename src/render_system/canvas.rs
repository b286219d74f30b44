use crate::constants::LINE_STRENGTH;
use crate::errors::SimulationError;
use crate::utils::point::PixelPoint;

/// Packed 24-bit color, `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    /// The low three bytes in little-endian order: blue, green, red.
    pub fn to_bgr_bytes(self) -> [u8; 3] {
        let [b, g, r, _] = self.0.to_le_bytes();
        [b, g, r]
    }
}

/// Width x height grid of colors addressed as `(x, y)`, with `y = 0` the
/// bottom row. Rows are stored bottom-up, matching the bitmap scan order.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, SimulationError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| {
                SimulationError::ResourceExhausted(format!(
                    "sizing a {}x{} canvas",
                    width, height
                ))
            })?;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|e| {
            SimulationError::ResourceExhausted(format!(
                "allocating a {}x{} canvas: {}",
                width, height, e
            ))
        })?;
        pixels.resize(len, Color::default());
        Ok(Canvas {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x as i64, y as i64).map(|i| self.pixels[i])
    }

    /// Colors one cell. Returns false, leaving the canvas untouched, when
    /// `(x, y)` lies outside `[0, width) x [0, height)`.
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> bool {
        self.plot(x as i64, y as i64, color)
    }

    fn plot(&mut self, x: i64, y: i64, color: Color) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    /// Row `y` from left to right, or `None` past the top of the canvas.
    pub fn row(&self, y: u32) -> Option<&[Color]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        self.pixels.get(start..start + self.width as usize)
    }

    /// Rows from the bottom of the image to the top.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        (0..self.height).filter_map(move |y| self.row(y))
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Fills the axis-aligned rectangle spanned by two corners, both
    /// inclusive. Cells outside the canvas are skipped.
    pub fn draw_rectangle(&mut self, corner1: PixelPoint, corner2: PixelPoint, color: Color) {
        let x_span = clip_span(corner1.x, corner2.x, self.width);
        let y_span = clip_span(corner1.y, corner2.y, self.height);
        let (Some((x_lo, x_hi)), Some((y_lo, y_hi))) = (x_span, y_span) else {
            return;
        };
        for y in y_lo..=y_hi {
            for x in x_lo..=x_hi {
                self.plot(x, y, color);
            }
        }
    }

    /// Draws a chain of thick segments through `points`.
    ///
    /// Each segment is walked along its dominant axis from the start point
    /// up to, but not including, the end point; every step stamps a
    /// `thickness` x `thickness` square. A thickness of 0 selects the
    /// default line strength.
    pub fn draw_polyline(&mut self, points: &[PixelPoint], thickness: u32, color: Color) {
        let strength = if thickness == 0 { LINE_STRENGTH } else { thickness };
        for segment in points.windows(2) {
            self.draw_segment(segment[0], segment[1], strength as i64, color);
        }
    }

    fn draw_segment(&mut self, from: PixelPoint, to: PixelPoint, strength: i64, color: Color) {
        let (x0, y0) = (from.x as i64, from.y as i64);
        let x_dif = to.x as i64 - x0;
        let y_dif = to.y as i64 - y0;
        let half = strength / 2;

        if (y_dif as i128).pow(2) >= (x_dif as i128).pow(2) {
            for cur_line in visible_steps(y0, y_dif, half, strength, self.height) {
                let x_center = x0 + interpolate(x_dif, cur_line, y_dif);
                self.stamp(x_center - half, y0 + cur_line - half, strength, color);
            }
        } else {
            for cur_line in visible_steps(x0, x_dif, half, strength, self.width) {
                let y_center = y0 + interpolate(y_dif, cur_line, x_dif);
                self.stamp(x0 + cur_line - half, y_center - half, strength, color);
            }
        }
    }

    fn stamp(&mut self, left: i64, bottom: i64, strength: i64, color: Color) {
        for dy in 0..strength {
            for dx in 0..strength {
                self.plot(left + dx, bottom + dy, color);
            }
        }
    }
}

/// Inclusive range between `a` and `b` that lies inside `[0, extent)`.
fn clip_span(a: i32, b: i32, extent: u32) -> Option<(i64, i64)> {
    let lo = (a.min(b) as i64).max(0);
    let hi = (a.max(b) as i64).min(extent as i64 - 1);
    (lo <= hi).then_some((lo, hi))
}

/// `minor * step / major`, truncated toward zero.
fn interpolate(minor: i64, step: i64, major: i64) -> i64 {
    (minor as i128 * step as i128 / major as i128) as i64
}

/// Steps along the dominant axis of a segment whose stamps can touch the
/// canvas. A segment with delta `d` visits `0, 1, .., d - 1` (or
/// `0, -1, .., d + 1` when `d` is negative); steps whose stamp falls
/// entirely outside `[0, extent)` on that axis are skipped, which leaves
/// the drawn cells unchanged.
fn visible_steps(
    origin: i64,
    delta: i64,
    half: i64,
    strength: i64,
    extent: u32,
) -> std::ops::RangeInclusive<i64> {
    let (first, last) = match delta.signum() {
        1 => (0, delta - 1),
        -1 => (delta + 1, 0),
        _ => (0, -1),
    };
    let lo = first.max(half - strength + 1 - origin);
    let hi = last.min(extent as i64 - 1 + half - origin);
    lo..=hi
}
