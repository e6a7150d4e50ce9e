//! Uniform distance-bin grid
//!
//! Bins are half-open, `[e_i, e_{i+1})`, except the last bin, which is closed
//! on the right so the grid's upper bound itself is counted.

use crate::errors::AnalysisError;
use serde::Serialize;

/// Largest number of bins a grid may have.
pub const MAX_BINS: usize = 10_000_000;

/// Edges `[0, Δ, 2Δ, ..., nΔ]` covering `[0, upper]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinGrid {
    bin_size: f64,
    edges: Vec<f64>,
}

impl BinGrid {
    /// Build the smallest grid of width `bin_size` whose last edge is at
    /// least `upper`. A grid always has at least one bin and never more
    /// than [`MAX_BINS`].
    pub fn new(bin_size: f64, upper: f64) -> Result<Self, AnalysisError> {
        validate_bin_size(bin_size)?;
        if !upper.is_finite() || upper < 0.0 {
            return Err(AnalysisError::InvalidParameter(format!(
                "histogram upper bound must be finite and non-negative, got {upper}"
            )));
        }

        let bins = (upper / bin_size).ceil();
        if bins > MAX_BINS as f64 {
            return Err(AnalysisError::InvalidParameter(format!(
                "radius_bin_size {bin_size} needs {bins:e} bins to reach {upper}, \
                 more than the limit of {MAX_BINS}"
            )));
        }

        let n_bins = (bins as usize).max(1);
        // Edges are i * Δ, not a running sum.
        let mut edges: Vec<f64> = (0..=n_bins).map(|i| i as f64 * bin_size).collect();
        while edges[edges.len() - 1] < upper {
            edges.push(edges.len() as f64 * bin_size);
        }

        Ok(Self { bin_size, edges })
    }

    /// Upper edge of every bin.
    pub fn right_edges(&self) -> &[f64] {
        &self.edges[1..]
    }

    pub fn n_bins(&self) -> usize {
        self.edges.len() - 1
    }

    /// Bin of `value`, or `None` if it lies outside `[0, last edge]` or is NaN.
    pub fn bin_index(&self, value: f64) -> Option<usize> {
        let upper = self.edges[self.edges.len() - 1];
        if !(0.0..=upper).contains(&value) {
            return None;
        }

        let n = self.n_bins();
        let mut idx = ((value / self.bin_size).floor() as usize).min(n - 1);
        // The division can land one bin off near an edge; settle against the
        // stored edges so both histograms use identical boundaries.
        while idx > 0 && value < self.edges[idx] {
            idx -= 1;
        }
        while idx + 1 < n && value >= self.edges[idx + 1] {
            idx += 1;
        }
        Some(idx)
    }

    /// Count values per bin; out-of-range values are dropped.
    pub fn histogram(&self, values: &[f64]) -> Vec<usize> {
        let mut counts = vec![0; self.n_bins()];
        for &value in values {
            if let Some(idx) = self.bin_index(value) {
                counts[idx] += 1;
            }
        }
        counts
    }
}

/// Check that a bin width is usable.
pub fn validate_bin_size(bin_size: f64) -> Result<(), AnalysisError> {
    if !bin_size.is_finite() || bin_size <= 0.0 {
        return Err(AnalysisError::InvalidParameter(format!(
            "radius_bin_size must be a positive finite number, got {bin_size}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_covers_upper_bound() {
        let grid = BinGrid::new(0.5, 2.2).unwrap();
        assert_eq!(grid.right_edges(), &[0.5, 1.0, 1.5, 2.0, 2.5]);
        assert_eq!(grid.n_bins(), 5);
    }

    #[test]
    fn test_grid_exact_multiple() {
        let grid = BinGrid::new(1.0, 3.0).unwrap();
        assert_eq!(grid.right_edges(), &[1.0, 2.0, 3.0]);
        assert_eq!(grid.bin_index(3.0), Some(2));
    }

    #[test]
    fn test_grid_floating_point_upper() {
        let grid = BinGrid::new(0.1, 0.3).unwrap();
        let last = *grid.right_edges().last().unwrap();
        assert!(last >= 0.3);
        assert_eq!(grid.bin_index(0.3), Some(grid.n_bins() - 1));
    }

    #[test]
    fn test_zero_upper_has_one_bin() {
        let grid = BinGrid::new(0.25, 0.0).unwrap();
        assert_eq!(grid.n_bins(), 1);
        assert_eq!(grid.bin_index(0.0), Some(0));
    }

    #[test]
    fn test_interior_edge_goes_to_higher_bin() {
        let grid = BinGrid::new(1.0, 4.0).unwrap();
        assert_eq!(grid.bin_index(0.0), Some(0));
        assert_eq!(grid.bin_index(0.999), Some(0));
        assert_eq!(grid.bin_index(1.0), Some(1));
        assert_eq!(grid.bin_index(2.0), Some(2));
        assert_eq!(grid.bin_index(4.0), Some(3));
    }

    #[test]
    fn test_out_of_range() {
        let grid = BinGrid::new(1.0, 2.0).unwrap();
        assert_eq!(grid.bin_index(2.0001), None);
        assert_eq!(grid.bin_index(-0.1), None);
        assert_eq!(grid.bin_index(f64::NAN), None);
    }

    #[test]
    fn test_histogram_counts() {
        let grid = BinGrid::new(1.0, 3.0).unwrap();
        let counts = grid.histogram(&[0.0, 0.5, 1.0, 2.5, 3.0, 7.0]);
        assert_eq!(counts, vec![2, 1, 2]);
    }

    #[test]
    fn test_invalid_bin_size() {
        for size in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                BinGrid::new(size, 1.0),
                Err(AnalysisError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_tiny_bin_size_exceeds_limit() {
        for size in [1e-300, 1e-9, f64::MIN_POSITIVE] {
            assert!(matches!(
                BinGrid::new(size, 5.0),
                Err(AnalysisError::InvalidParameter(_))
            ));
        }
        // A tiny width is fine while the range stays small
        assert_eq!(BinGrid::new(1e-300, 0.0).unwrap().n_bins(), 1);
    }

    #[test]
    fn test_grid_at_limit() {
        let grid = BinGrid::new(1.0, MAX_BINS as f64).unwrap();
        assert_eq!(grid.n_bins(), MAX_BINS);
        assert!(BinGrid::new(1.0, MAX_BINS as f64 + 1.0).is_err());
    }

    #[test]
    fn test_invalid_upper() {
        assert!(BinGrid::new(1.0, -1.0).is_err());
        assert!(BinGrid::new(1.0, f64::INFINITY).is_err());
    }
}
