use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("speed must be > 0 (got {0})")]
    InvalidSpeed(f32),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("out of memory while {0}")]
    ResourceExhausted(String),

    #[error("couldn't write file {}: {source}", .path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed bitmap: {0}")]
    MalformedBitmap(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimulationError {
    /// Process exit code reported by the `cannon` binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            SimulationError::InvalidParameter(_) => 1,
            SimulationError::ResourceExhausted(_) | SimulationError::MalformedBitmap(_) => 2,
            SimulationError::OutputUnavailable { .. } | SimulationError::Io(_) => 3,
            SimulationError::InvalidSpeed(_) => 4,
        }
    }
}
