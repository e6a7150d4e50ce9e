//! Pair distribution function
//!
//! Estimates how the separation between co-present pedestrians deviates from
//! a non-interacting baseline.
//!
//! # Formula
//!
//! $$g(r) = \frac{P(r)}{P_{NI}(r)}$$
//!
//! where $P(r)$ is the fraction of pairwise distances (over all frames) that
//! fall into the bin ending at $r$, and $P_{NI}(r)$ is the same quantity for a
//! copy of the dataset whose frame labels have been randomly permuted. Both
//! histograms share one grid derived from the largest real distance and are
//! normalized by the number of *real* distances.
//!
//! The permutation keeps every position and the number of rows per frame but
//! breaks which pedestrians were present at the same time. A pedestrian may
//! land twice in one frame, so the reference only approximates a true null
//! model.

use crate::analysis::distance::{pairwise_distances_per_frame, pairwise_distances_with_stats};
use crate::analysis::histogram::{validate_bin_size, BinGrid};
use crate::analysis::utils::max_value;
use crate::errors::AnalysisError;
use pedflow_trajectory::TrajectoryDataset;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Minimum number of frames that must contribute real pairwise distances.
pub const MIN_FRAMES_WITH_PAIRS: usize = 2;

/// Parameters of a pair distribution run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairDistributionParams {
    /// Width of the distance bins, in meters
    pub radius_bin_size: f64,
    /// Seed of the frame shuffle; a fresh one is drawn when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl PairDistributionParams {
    pub fn new(radius_bin_size: f64) -> Self {
        Self {
            radius_bin_size,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        validate_bin_size(self.radius_bin_size)
    }
}

/// Result of a pair distribution run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairDistribution {
    /// Right edge of every bin: `[Δ, 2Δ, ...]`
    pub bin_edges: Vec<f64>,
    /// g(r) per bin; `+inf` where only the reference is empty, NaN where both are
    pub g: Vec<f64>,
    /// Real distance histogram normalized by the real distance count
    pub p_real: Vec<f64>,
    /// Reference histogram normalized by the real distance count
    pub p_reference: Vec<f64>,
    pub real_distance_count: usize,
    pub reference_distance_count: usize,
}

impl PairDistribution {
    pub fn n_bins(&self) -> usize {
        self.g.len()
    }

    /// Number of bins whose ratio is not finite.
    pub fn degenerate_bins(&self) -> usize {
        self.g.iter().filter(|v| !v.is_finite()).count()
    }

    /// Split into `(bin_edges, g)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.bin_edges, self.g)
    }
}

/// Compute g(r) with a freshly seeded frame shuffle.
///
/// # Arguments
///
/// * `dataset` - Trajectories to analyze
/// * `radius_bin_size` - Bin width in meters, must be positive
///
/// # Errors
///
/// * [`AnalysisError::InvalidParameter`] if `radius_bin_size` is not a
///   positive finite number. Checked before any distance is computed.
/// * [`AnalysisError::InsufficientData`] if fewer than two frames hold two or
///   more distinct pedestrians.
///
/// # References
///
/// Cordes, J., Schadschneider, A., & Nicolas, A. (2024). Dimensionless
/// numbers reveal distinct regimes in the structure of pedestrian crowds.
/// PNAS Nexus, 3(4).
pub fn pair_distribution_function(
    dataset: &TrajectoryDataset,
    radius_bin_size: f64,
) -> Result<PairDistribution, AnalysisError> {
    let seed: u64 = rand::random();
    debug!(seed, "seeding frame shuffle");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    pair_distribution_function_with_rng(dataset, radius_bin_size, &mut rng)
}

/// Compute g(r) from a parameter set; seeded runs are reproducible.
pub fn pair_distribution_with_params(
    dataset: &TrajectoryDataset,
    params: &PairDistributionParams,
) -> Result<PairDistribution, AnalysisError> {
    params.validate()?;
    match params.seed {
        Some(seed) => {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
            pair_distribution_function_with_rng(dataset, params.radius_bin_size, &mut rng)
        }
        None => pair_distribution_function(dataset, params.radius_bin_size),
    }
}

/// Compute g(r), drawing the frame permutation from `rng`.
pub fn pair_distribution_function_with_rng<R: Rng + ?Sized>(
    dataset: &TrajectoryDataset,
    radius_bin_size: f64,
    rng: &mut R,
) -> Result<PairDistribution, AnalysisError> {
    validate_bin_size(radius_bin_size)?;

    let (real, stats) = pairwise_distances_with_stats(dataset);
    if stats.frames_with_pairs < MIN_FRAMES_WITH_PAIRS {
        return Err(AnalysisError::InsufficientData {
            what: "frames with at least two pedestrians",
            required: MIN_FRAMES_WITH_PAIRS,
            available: stats.frames_with_pairs,
        });
    }

    let shuffled = dataset.with_shuffled_frames(rng);
    let reference = pairwise_distances_per_frame(&shuffled);

    pair_distribution_from_distances(&real, &reference, radius_bin_size)
}

/// Compute g(r) from already extracted distance multisets.
///
/// The grid is built from the maximum of `real` only; `reference` values
/// beyond the last edge are not counted. Both histograms are divided by
/// `real.len()`.
pub fn pair_distribution_from_distances(
    real: &[f64],
    reference: &[f64],
    radius_bin_size: f64,
) -> Result<PairDistribution, AnalysisError> {
    validate_bin_size(radius_bin_size)?;

    let max_real = max_value(real).ok_or(AnalysisError::InsufficientData {
        what: "real pairwise distances",
        required: 1,
        available: 0,
    })?;
    let grid = BinGrid::new(radius_bin_size, max_real)?;

    let n_real = real.len() as f64;
    let p_real: Vec<f64> = grid
        .histogram(real)
        .into_iter()
        .map(|count| count as f64 / n_real)
        .collect();
    let p_reference: Vec<f64> = grid
        .histogram(reference)
        .into_iter()
        .map(|count| count as f64 / n_real)
        .collect();

    let g: Vec<f64> = p_real
        .iter()
        .zip(&p_reference)
        .map(|(&p, &p_ni)| ratio(p, p_ni))
        .collect();

    let result = PairDistribution {
        bin_edges: grid.right_edges().to_vec(),
        g,
        p_real,
        p_reference,
        real_distance_count: real.len(),
        reference_distance_count: reference.len(),
    };

    debug!(
        bins = result.n_bins(),
        max_distance = max_real,
        real = result.real_distance_count,
        reference = result.reference_distance_count,
        degenerate_bins = result.degenerate_bins(),
        "computed pair distribution"
    );
    let infinite_bins = result.g.iter().filter(|v| v.is_infinite()).count();
    if infinite_bins > 0 {
        warn!(infinite_bins, "bins with real but without reference distances");
    }

    Ok(result)
}

/// `p / p_ni` with explicit sentinels for empty reference bins.
#[inline]
fn ratio(p: f64, p_ni: f64) -> f64 {
    if p_ni > 0.0 {
        p / p_ni
    } else if p > 0.0 {
        f64::INFINITY
    } else {
        f64::NAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedflow_trajectory::TrajectoryRecord;

    fn create_crowd(frames: i64, pedestrians: i64) -> TrajectoryDataset {
        let mut records = Vec::new();
        for frame in 0..frames {
            for id in 0..pedestrians {
                let phase = (frame * 7 + id * 13) as f64;
                records.push(TrajectoryRecord::new(
                    id,
                    frame,
                    id as f64 * 0.8 + (phase * 0.37).sin() * 0.3,
                    (frame as f64 * 0.05) + (phase * 0.11).cos() * 0.4,
                ));
            }
        }
        TrajectoryDataset::new(records, 25.0).unwrap()
    }

    #[test]
    fn test_ratio_sentinels() {
        assert_eq!(ratio(0.5, 0.25), 2.0);
        assert_eq!(ratio(0.5, 0.0), f64::INFINITY);
        assert!(ratio(0.0, 0.0).is_nan());
        assert_eq!(ratio(0.0, 0.5), 0.0);
    }

    #[test]
    fn test_from_distances_basic() {
        let real = [0.5, 1.5, 1.7, 2.5];
        let reference = [0.2, 0.4, 1.1, 2.9, 3.5];

        let result = pair_distribution_from_distances(&real, &reference, 1.0).unwrap();

        assert_eq!(result.bin_edges, vec![1.0, 2.0, 3.0]);
        assert_eq!(result.p_real, vec![0.25, 0.5, 0.25]);
        assert_eq!(result.p_reference, vec![0.5, 0.25, 0.25]);
        assert_eq!(result.g, vec![0.5, 2.0, 1.0]);
        assert_eq!(result.real_distance_count, 4);
        assert_eq!(result.reference_distance_count, 5);
    }

    #[test]
    fn test_degenerate_bin_is_infinite() {
        let real = [0.5, 1.5];
        let reference = [0.5, 0.6];

        let result = pair_distribution_from_distances(&real, &reference, 1.0).unwrap();

        assert_eq!(result.g[0], 0.5);
        assert_eq!(result.g[1], f64::INFINITY);
        assert_eq!(result.degenerate_bins(), 1);
    }

    #[test]
    fn test_empty_bins_are_nan() {
        let real = [0.5, 2.5];
        let reference = [0.5, 2.5];

        let result = pair_distribution_from_distances(&real, &reference, 1.0).unwrap();

        assert_eq!(result.g[0], 1.0);
        assert!(result.g[1].is_nan());
        assert_eq!(result.g[2], 1.0);
    }

    #[test]
    fn test_from_distances_empty_real() {
        assert!(matches!(
            pair_distribution_from_distances(&[], &[1.0], 0.5),
            Err(AnalysisError::InsufficientData { available: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_bin_size() {
        let dataset = create_crowd(10, 4);
        for size in [0.0, -0.5, f64::NAN] {
            assert!(matches!(
                pair_distribution_function(&dataset, size),
                Err(AnalysisError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_tiny_bin_size_is_rejected() {
        assert!(matches!(
            pair_distribution_from_distances(&[5.0], &[1.0], 1e-300),
            Err(AnalysisError::InvalidParameter(_))
        ));

        let dataset = create_crowd(10, 4);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        assert!(matches!(
            pair_distribution_function_with_rng(&dataset, 1e-300, &mut rng),
            Err(AnalysisError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_invalid_bin_size_checked_before_data() {
        let empty = TrajectoryDataset::new(vec![], 10.0).unwrap();
        assert!(matches!(
            pair_distribution_function(&empty, 0.0),
            Err(AnalysisError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_insufficient_frames() {
        let records = vec![
            TrajectoryRecord::new(1, 0, 0.0, 0.0),
            TrajectoryRecord::new(2, 0, 3.0, 4.0),
            TrajectoryRecord::new(1, 1, 0.0, 0.0),
        ];
        let dataset = TrajectoryDataset::new(records, 10.0).unwrap();

        assert_eq!(
            pair_distribution_function(&dataset, 0.5),
            Err(AnalysisError::InsufficientData {
                what: "frames with at least two pedestrians",
                required: 2,
                available: 1,
            })
        );
    }

    #[test]
    fn test_bins_match_edges_and_normalize() {
        let dataset = create_crowd(30, 6);
        let params = PairDistributionParams::new(0.25).with_seed(42);

        let result = pair_distribution_with_params(&dataset, &params).unwrap();

        assert_eq!(result.bin_edges.len(), result.g.len());
        assert_eq!(result.p_real.len(), result.g.len());
        assert_eq!(result.real_distance_count, 30 * 15);
        let total: f64 = result.p_real.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
        for (i, edge) in result.bin_edges.iter().enumerate() {
            assert!((edge - (i + 1) as f64 * 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let dataset = create_crowd(40, 5);
        let params = PairDistributionParams::new(0.5).with_seed(7);

        let a = pair_distribution_with_params(&dataset, &params).unwrap();
        let b = pair_distribution_with_params(&dataset, &params).unwrap();

        assert_eq!(a.bin_edges, b.bin_edges);
        assert_eq!(a.p_reference, b.p_reference);
        assert_eq!(a.reference_distance_count, b.reference_distance_count);
    }

    #[test]
    fn test_into_parts() {
        let result = pair_distribution_from_distances(&[0.5, 1.5], &[0.5, 1.5], 1.0).unwrap();
        let (edges, g) = result.into_parts();
        assert_eq!(edges, vec![1.0, 2.0]);
        assert_eq!(g, vec![1.0, 1.0]);
    }

    #[test]
    fn test_params_serde() {
        let params = PairDistributionParams::new(0.1).with_seed(5);
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"radius_bin_size":0.1,"seed":5}"#);

        let parsed: PairDistributionParams =
            serde_json::from_str(r#"{"radius_bin_size":0.2}"#).unwrap();
        assert_eq!(parsed, PairDistributionParams::new(0.2));
    }
}
