//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use pedflow_trajectory::prelude::*;
//!
//! let records = vec![
//!     TrajectoryRecord::new(1, 0, 0.0, 0.0),
//!     TrajectoryRecord::new(2, 0, 3.0, 4.0),
//! ];
//! let dataset = TrajectoryDataset::new(records, 25.0).unwrap();
//! assert_eq!(dataset.len(), 2);
//! ```

pub use crate::base::{TrajectoryRecord, TrajectoryUnit};
pub use crate::data::{FrameEntry, FrameIndex, FrameSlice, TrajectoryDataset};
pub use crate::errors::TrajectoryError;
pub use crate::io::{load_trajectory, parse_trajectory, LoadOptions};
