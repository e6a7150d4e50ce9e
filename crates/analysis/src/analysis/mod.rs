//! Pedestrian-dynamics analysis tools
//!
//! This module provides:
//! - Per-frame pairwise distances between co-present pedestrians
//! - The pair distribution function g(r) against a frame-shuffled reference
//! - Individual speeds and mean speed per frame

pub mod distance;
pub mod histogram;
pub mod pair_distribution;
pub mod utils;
pub mod velocity;

// Re-export commonly used functions
pub use distance::{
    frame_pairwise_distances, pairwise_distances_per_frame, pairwise_distances_with_stats,
    FramePairStats,
};
pub use histogram::BinGrid;
pub use pair_distribution::{
    pair_distribution_from_distances, pair_distribution_function,
    pair_distribution_function_with_rng, pair_distribution_with_params, PairDistribution,
    PairDistributionParams,
};
pub use velocity::{individual_speed, mean_speed_per_frame, MeanSpeed, SpeedSample};
