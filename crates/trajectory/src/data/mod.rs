//! Trajectory container and its frame index.

pub mod dataset;
pub mod frame_index;

pub use dataset::TrajectoryDataset;
pub use frame_index::{FrameEntry, FrameIndex, FrameSlice};
