pub mod commands;
pub mod params;

pub use commands::{Cli, Commands};
