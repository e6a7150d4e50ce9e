//! # Analysis Crate
//!
//! Pedestrian-dynamics statistics computed on a
//! [`TrajectoryDataset`](pedflow_trajectory::TrajectoryDataset):
//! per-frame pairwise distances, the pair distribution function g(r), and
//! individual and per-frame mean speeds.

pub mod analysis;
pub mod errors;

pub use errors::AnalysisError;
