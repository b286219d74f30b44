pub mod config;
pub mod mission;
pub mod parameters;
