pub mod point;
pub mod vector2d;
