//! # Trajectory Crate
//!
//! The `trajectory` crate provides the data model consumed by the pedflow
//! analyses: per-pedestrian position records, the dataset container with its
//! frame and track groupings, the frame shuffle used to build non-interacting
//! reference data, and the loader for whitespace-separated trajectory files.

pub mod base;
pub mod data;
pub mod errors;
pub mod io;
pub mod prelude;

pub use base::{TrajectoryRecord, TrajectoryUnit};
pub use data::{FrameEntry, FrameIndex, FrameSlice, TrajectoryDataset};
pub use errors::TrajectoryError;
pub use io::{load_trajectory, parse_trajectory, LoadOptions};
