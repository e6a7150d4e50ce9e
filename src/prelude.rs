//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use pedflow::prelude::*;
//!
//! let records = vec![
//!     TrajectoryRecord::new(1, 0, 0.0, 0.0),
//!     TrajectoryRecord::new(2, 0, 3.0, 4.0),
//! ];
//! let dataset = TrajectoryDataset::new(records, 10.0).unwrap();
//! let distances = pairwise_distances_per_frame(&dataset);
//! assert_eq!(distances, vec![5.0]);
//! ```

pub use pedflow_trajectory::prelude::*;

pub use pedflow_analysis::analysis::{
    individual_speed, mean_speed_per_frame, pair_distribution_function,
    pair_distribution_function_with_rng, pair_distribution_with_params,
    pairwise_distances_per_frame, MeanSpeed, PairDistribution, PairDistributionParams,
    SpeedSample,
};
pub use pedflow_analysis::AnalysisError;
