//! pedflow: analysis of recorded pedestrian trajectories.
//!
//! This crate bundles the workspace libraries behind one import path:
//! the trajectory data model and loader from `pedflow_trajectory`, and the
//! speed and pair distribution analyses from `pedflow_analysis`.

pub use pedflow_analysis::analysis;
pub use pedflow_trajectory::{base, data, errors, io};

pub mod prelude;

// Re-export commonly used types for convenient external access.
pub use pedflow_analysis::AnalysisError;
pub use pedflow_trajectory::{
    load_trajectory, LoadOptions, TrajectoryDataset, TrajectoryError, TrajectoryRecord,
    TrajectoryUnit,
};
