//! Trajectory dataset container.
//!
//! A dataset is an ordered list of position records plus the frame rate of
//! the recording. It offers the two groupings the analyses need: by frame
//! (through [`FrameIndex`]) and by pedestrian (through [`TrajectoryDataset::tracks`]).

use crate::base::TrajectoryRecord;
use crate::data::FrameIndex;
use crate::errors::TrajectoryError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Immutable set of trajectory records.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryDataset {
    records: Vec<TrajectoryRecord>,
    /// Frames per second
    frame_rate: f64,
}

impl TrajectoryDataset {
    /// Create a dataset after validating the frame rate, coordinates and
    /// the one-record-per-pedestrian-per-frame invariant.
    pub fn new(records: Vec<TrajectoryRecord>, frame_rate: f64) -> Result<Self, TrajectoryError> {
        if !frame_rate.is_finite() || frame_rate <= 0.0 {
            return Err(TrajectoryError::InvalidFrameRate(frame_rate));
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !record.x().is_finite() || !record.y().is_finite() {
                return Err(TrajectoryError::InvalidCoordinate {
                    id: record.id,
                    frame: record.frame,
                });
            }
            if !seen.insert((record.id, record.frame)) {
                return Err(TrajectoryError::DuplicateRecord {
                    id: record.id,
                    frame: record.frame,
                });
            }
        }

        Ok(Self {
            records,
            frame_rate,
        })
    }

    /// Get all records as a slice.
    pub fn records(&self) -> &[TrajectoryRecord] {
        &self.records
    }

    /// Get the frame rate in frames per second.
    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest and largest frame index, `None` for an empty dataset.
    pub fn frame_range(&self) -> Option<(i64, i64)> {
        let min = self.records.iter().map(|r| r.frame).min()?;
        let max = self.records.iter().map(|r| r.frame).max()?;
        Some((min, max))
    }

    /// Sorted distinct pedestrian ids.
    pub fn pedestrian_ids(&self) -> Vec<i64> {
        self.records
            .iter()
            .map(|r| r.id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Group the records by frame.
    pub fn frame_index(&self) -> FrameIndex {
        FrameIndex::build(&self.records)
    }

    /// Group the records by pedestrian, each track sorted by frame.
    pub fn tracks(&self) -> BTreeMap<i64, Vec<TrajectoryRecord>> {
        let mut tracks: BTreeMap<i64, Vec<TrajectoryRecord>> = BTreeMap::new();
        for record in &self.records {
            tracks.entry(record.id).or_default().push(*record);
        }
        for track in tracks.values_mut() {
            track.sort_by_key(|r| r.frame);
        }
        tracks
    }

    /// Copy of this dataset with the frame column randomly permuted.
    ///
    /// Ids and positions stay on their rows and the record count is kept;
    /// only the frame labels move. The copy destroys co-presence between
    /// pedestrians while keeping the spatial distribution of positions.
    /// Every frame keeps its row count, but a pedestrian may end up with
    /// several rows in the same frame, so the copy does not go through
    /// [`TrajectoryDataset::new`].
    pub fn with_shuffled_frames<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut frames: Vec<i64> = self.records.iter().map(|r| r.frame).collect();
        frames.shuffle(rng);

        let records = self
            .records
            .iter()
            .zip(frames)
            .map(|(record, frame)| TrajectoryRecord { frame, ..*record })
            .collect();

        Self {
            records,
            frame_rate: self.frame_rate,
        }
    }
}
