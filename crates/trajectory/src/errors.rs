use std::path::PathBuf;
use thiserror::Error;

/// Error type for building and loading trajectory data.
#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("{} is not a file", .0.display())]
    NotAFile(PathBuf),

    /// A data line could not be parsed. Line numbers are 1-based.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(
        "Trajectory data is empty. Expected at least 4 whitespace-separated columns \
         (ID, frame, X, Y); lines starting with '#' are ignored"
    )]
    EmptyFile,

    #[error("Frame rate is needed, but none was found in the trajectory header and no default was given")]
    MissingFrameRate,

    #[error("Frame rate must be a positive finite value, got {0}")]
    InvalidFrameRate(f64),

    #[error("Default frame rate differs from the frame rate in the trajectory header: {default} != {parsed}")]
    FrameRateMismatch { default: f64, parsed: f64 },

    #[error("Unit is needed, but none was found in the trajectory header and no default was given")]
    MissingUnit,

    #[error("Unknown unit '{0}' (expected m or cm)")]
    UnknownUnit(String),

    #[error("Default unit differs from the unit in the trajectory header: {default} != {parsed}")]
    UnitMismatch {
        default: crate::base::TrajectoryUnit,
        parsed: crate::base::TrajectoryUnit,
    },

    #[error("Non-finite coordinate for pedestrian {id} in frame {frame}")]
    InvalidCoordinate { id: i64, frame: i64 },

    #[error("Pedestrian {id} appears more than once in frame {frame}")]
    DuplicateRecord { id: i64, frame: i64 },
}
