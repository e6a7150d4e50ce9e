//! Pairwise distances between co-present pedestrians
//!
//! For every frame, all unordered pairs of rows in that frame are enumerated
//! directly (`i < j`) and their Euclidean distances collected. Frames are
//! independent and processed in parallel; results are concatenated in frame
//! order so the output is deterministic.

use pedflow_trajectory::{FrameEntry, FrameIndex, TrajectoryDataset};
use rayon::prelude::*;
use tracing::debug;

/// Summary of a per-frame distance extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FramePairStats {
    /// Number of distinct frames in the dataset
    pub frames: usize,
    /// Number of frames that contributed at least one distance
    pub frames_with_pairs: usize,
    /// Total number of distances
    pub distances: usize,
}

/// Calculate all pairwise distances per frame
///
/// A frame contributes only if it holds at least two distinct pedestrian
/// ids; it then contributes one distance for every unordered pair of its
/// rows, i.e. `N(N-1)/2` distances for `N` rows.
///
/// # Examples
///
/// ```
/// use pedflow_analysis::analysis::pairwise_distances_per_frame;
/// use pedflow_trajectory::{TrajectoryDataset, TrajectoryRecord};
///
/// let dataset = TrajectoryDataset::new(
///     vec![
///         TrajectoryRecord::new(1, 0, 0.0, 0.0),
///         TrajectoryRecord::new(2, 0, 3.0, 4.0),
///         TrajectoryRecord::new(1, 1, 1.0, 1.0),
///     ],
///     10.0,
/// )
/// .unwrap();
///
/// assert_eq!(pairwise_distances_per_frame(&dataset), vec![5.0]);
/// ```
pub fn pairwise_distances_per_frame(dataset: &TrajectoryDataset) -> Vec<f64> {
    pairwise_distances_with_stats(dataset).0
}

/// Same as [`pairwise_distances_per_frame`], also reporting how many frames
/// contributed.
pub fn pairwise_distances_with_stats(dataset: &TrajectoryDataset) -> (Vec<f64>, FramePairStats) {
    let (distances, stats) = index_pairwise_distances(&dataset.frame_index());
    debug!(
        frames = stats.frames,
        frames_with_pairs = stats.frames_with_pairs,
        distances = stats.distances,
        "extracted pairwise distances"
    );

    (distances, stats)
}

/// Distances of all frames of `index` holding two or more distinct ids, in
/// frame order. Pairs are taken over every row of such a frame, repeated ids
/// included.
fn index_pairwise_distances(index: &FrameIndex) -> (Vec<f64>, FramePairStats) {
    let frames_with_pairs = index
        .frames()
        .iter()
        .filter(|slice| slice.distinct_ids >= 2)
        .count();

    let distances: Vec<f64> = index
        .frames()
        .par_iter()
        .filter(|slice| slice.distinct_ids >= 2)
        .flat_map_iter(|&slice| frame_pairwise_distances(index.get(slice)))
        .collect();

    let stats = FramePairStats {
        frames: index.len(),
        frames_with_pairs,
        distances: distances.len(),
    };
    (distances, stats)
}

/// Distances of every unordered pair of entries in one frame.
///
/// Self-pairs are excluded and each pair appears once, so the result has
/// `n(n-1)/2` elements for `n` entries.
pub fn frame_pairwise_distances(entries: &[FrameEntry]) -> Vec<f64> {
    let n = entries.len();
    if n < 2 {
        return Vec::new();
    }

    let mut distances = Vec::with_capacity(n * (n - 1) / 2);
    for (i, a) in entries.iter().enumerate() {
        for b in &entries[i + 1..] {
            distances.push(nalgebra::distance(&a.position, &b.position));
        }
    }

    distances
}
