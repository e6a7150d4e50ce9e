//! Individual and mean speeds
//!
//! The speed of a pedestrian at a record is estimated from the displacement
//! between the record `frame_step` rows earlier and `frame_step` rows later
//! on the same track. Near the ends of a track the missing side is replaced
//! by the record itself, shortening the window to one side.

use crate::analysis::utils::mean;
use crate::errors::AnalysisError;
use pedflow_trajectory::{TrajectoryDataset, TrajectoryRecord};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Speed of one pedestrian at one frame, in m/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedSample {
    pub id: i64,
    pub frame: i64,
    pub speed: f64,
}

/// Mean speed over all pedestrians of one frame, in m/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanSpeed {
    pub frame: i64,
    pub speed: f64,
}

/// Calculate the speed of every pedestrian at every frame
///
/// # Arguments
///
/// * `dataset` - Trajectories to analyze
/// * `frame_step` - Number of track rows before and after each record used
///   for the displacement
///
/// # Returns
///
/// Samples sorted by `(id, frame)`. Records whose window collapses to a
/// single frame (tracks with one record) have no defined speed and are
/// omitted.
pub fn individual_speed(
    dataset: &TrajectoryDataset,
    frame_step: usize,
) -> Result<Vec<SpeedSample>, AnalysisError> {
    if frame_step == 0 {
        return Err(AnalysisError::InvalidParameter(
            "frame_step must be at least 1".to_string(),
        ));
    }

    let frame_rate = dataset.frame_rate();
    let tracks: Vec<Vec<TrajectoryRecord>> = dataset.tracks().into_values().collect();

    let samples: Vec<SpeedSample> = tracks
        .par_iter()
        .map(|track| track_speeds(track, frame_step, frame_rate))
        .collect::<Vec<_>>()
        .concat();

    debug!(
        tracks = tracks.len(),
        samples = samples.len(),
        frame_step,
        "computed individual speeds"
    );

    Ok(samples)
}

fn track_speeds(track: &[TrajectoryRecord], frame_step: usize, frame_rate: f64) -> Vec<SpeedSample> {
    track
        .iter()
        .enumerate()
        .filter_map(|(k, current)| {
            let start = if k >= frame_step {
                &track[k - frame_step]
            } else {
                current
            };
            let end = track.get(k + frame_step).unwrap_or(current);

            let elapsed_frames = end.frame - start.frame;
            if elapsed_frames == 0 {
                return None;
            }

            let seconds = elapsed_frames as f64 / frame_rate;
            Some(SpeedSample {
                id: current.id,
                frame: current.frame,
                speed: start.distance_to(end) / seconds,
            })
        })
        .collect()
}

/// Calculate the mean speed per frame
///
/// Every frame between the dataset's first and last frame is reported;
/// frames without any speed sample get `0.0`.
///
/// # Returns
///
/// Tuple of (mean speed per frame, individual speeds)
pub fn mean_speed_per_frame(
    dataset: &TrajectoryDataset,
    frame_step: usize,
) -> Result<(Vec<MeanSpeed>, Vec<SpeedSample>), AnalysisError> {
    let samples = individual_speed(dataset, frame_step)?;
    let (first, last) = dataset
        .frame_range()
        .ok_or(AnalysisError::InsufficientData {
            what: "trajectory records",
            required: 1,
            available: 0,
        })?;

    let mut by_frame: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
    for sample in &samples {
        by_frame.entry(sample.frame).or_default().push(sample.speed);
    }

    let means = (first..=last)
        .map(|frame| MeanSpeed {
            frame,
            speed: by_frame.get(&frame).map_or(0.0, |speeds| mean(speeds)),
        })
        .collect();

    Ok((means, samples))
}
