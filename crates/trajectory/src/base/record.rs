use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A single observation of one pedestrian in one frame.
///
/// Positions are stored in meters; the loader converts other units on read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryRecord {
    /// Pedestrian identifier, repeated across the frames of its track
    pub id: i64,
    /// Frame index (temporal ordering key)
    pub frame: i64,
    /// Planar position in meters
    pub position: Point2<f64>,
}

impl TrajectoryRecord {
    pub fn new(id: i64, frame: i64, x: f64, y: f64) -> Self {
        Self {
            id,
            frame,
            position: Point2::new(x, y),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Euclidean distance to another record's position.
    #[inline]
    pub fn distance_to(&self, other: &TrajectoryRecord) -> f64 {
        nalgebra::distance(&self.position, &other.position)
    }
}
