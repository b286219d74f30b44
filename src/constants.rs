// Unit Conversion
pub const METERS_PER_PIXEL: f32 = 10.0;
pub const DEGREES_PER_RADIAN: f64 = 57.2957795;

// Default Parameters
pub const DEFAULT_WIDTH: u32 = 320; // px
pub const DEFAULT_HEIGHT: u32 = 320; // px
pub const DEFAULT_PPS: u32 = 5; // samples per second
pub const DEFAULT_GRAVITATION: f32 = 9.798; // m/s²
pub const DEFAULT_WIND_ANGLE: f32 = 0.0; // degrees
pub const DEFAULT_WIND_FORCE: f32 = 0.0; // m/s²

// Integrator
pub const TRAJECTORY_GROWTH_STEP: usize = 10; // minimum samples per reallocation

// Scene Colors (packed 0xRRGGBB)
pub const SKY_COLOR: u32 = 0x60D0FF;
pub const GROUND_COLOR: u32 = 0x005000;
pub const BARREL_COLOR: u32 = 0xA0A0A0;
pub const BASE_COLOR: u32 = 0x705000;
pub const TRAJECTORY_COLOR: u32 = 0xFF0000;

// Line Rasterization
pub const LINE_STRENGTH: u32 = 5; // px, used when a thickness of 0 is requested

// Bitmap Format
pub const BITMAP_SIGNATURE: u16 = 19778; // "BM"
pub const FILE_HEADER_SIZE: u32 = 14; // bytes
pub const INFO_HEADER_SIZE: u32 = 40; // bytes
pub const PIXEL_ARRAY_OFFSET: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
pub const BITS_PER_PIXEL: u16 = 24;
pub const BYTES_PER_PIXEL: u32 = 3;
pub const PLANES: u16 = 1;
pub const COMPRESSION: u32 = 0;
pub const PIXELS_PER_METER: u32 = 0x130B; // 4875
