use crate::base::TrajectoryRecord;
use nalgebra::Point2;
use std::collections::HashSet;

/// One pedestrian's position inside a frame group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameEntry {
    pub id: i64,
    pub position: Point2<f64>,
}

/// Handle to the entries of one frame inside a [`FrameIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameSlice {
    pub frame: i64,
    pub start: usize,
    pub len: usize,
    /// Number of distinct pedestrian ids among the entries.
    pub distinct_ids: usize,
}

/// Frame-grouped view of a set of records.
///
/// All entries live in one contiguous buffer, ordered by frame and, within a
/// frame, by their position in the source records. Each frame is addressed by
/// a [`FrameSlice`] instead of owning its own allocation, so grouping costs a
/// single sort and two allocations regardless of the number of frames.
#[derive(Debug, Clone, Default)]
pub struct FrameIndex {
    entries: Vec<FrameEntry>,
    frames: Vec<FrameSlice>,
}

impl FrameIndex {
    /// Group records by frame.
    pub fn build(records: &[TrajectoryRecord]) -> Self {
        let mut order: Vec<usize> = (0..records.len()).collect();
        // Stable: keeps record order inside a frame.
        order.sort_by_key(|&i| records[i].frame);

        let mut entries = Vec::with_capacity(records.len());
        let mut frames = Vec::new();
        let mut ids = HashSet::new();

        for group in order.chunk_by(|&a, &b| records[a].frame == records[b].frame) {
            let start = entries.len();
            ids.clear();
            for &i in group {
                let record = &records[i];
                ids.insert(record.id);
                entries.push(FrameEntry {
                    id: record.id,
                    position: record.position,
                });
            }
            frames.push(FrameSlice {
                frame: records[group[0]].frame,
                start,
                len: group.len(),
                distinct_ids: ids.len(),
            });
        }

        Self { entries, frames }
    }

    /// Frame handles in ascending frame order.
    pub fn frames(&self) -> &[FrameSlice] {
        &self.frames
    }

    /// Number of distinct frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Access the entries for a frame handle.
    ///
    /// # Panics
    /// Panics if the slice does not belong to this index.
    #[inline]
    pub fn get(&self, slice: FrameSlice) -> &[FrameEntry] {
        &self.entries[slice.start..slice.start + slice.len]
    }

    /// Largest number of entries found in a single frame.
    pub fn max_occupancy(&self) -> usize {
        self.frames.iter().map(|slice| slice.len).max().unwrap_or(0)
    }
}
