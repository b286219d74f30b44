pub mod bitmap_system;
pub mod constants;
pub mod control;
pub mod errors;
pub mod render_system;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::config::{apply_config, load_config, ConfigEntry, ConfigReport};
pub use control::mission::{Mission, MissionOutcome};
pub use control::parameters::SimulationParameters;
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::integrator::{simulate, TrajectoryPoints};

// Re-export commonly used items from render_system and bitmap_system
pub use bitmap_system::encoder::{BitmapEncoder, BitmapHeader, RowAlignment};
pub use render_system::canvas::{Canvas, Color};
pub use render_system::scene::{render, CannonGeometry};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::point::PixelPoint;
pub use utils::vector2d::Vector2D;
