//! Reading trajectory files.

pub mod loader;

pub use loader::{load_trajectory, parse_trajectory, LoadOptions};
