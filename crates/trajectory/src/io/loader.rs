//! Loader for whitespace-separated trajectory files.
//!
//! The expected layout is one record per line with at least four columns,
//! `ID frame X Y`, separated by any whitespace. Further columns (e.g. `Z`)
//! are ignored. Lines starting with `#` are comments; the leading comment
//! block is also scanned for the frame rate and coordinate unit:
//!
//! ```text
//! # framerate: 16.00
//! # ID  frame  x/cm  y/cm  z/cm
//! 1     0      12.4  -80.0  170.0
//! ```

use crate::base::{TrajectoryRecord, TrajectoryUnit};
use crate::data::TrajectoryDataset;
use crate::errors::TrajectoryError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Fallback metadata used when the file header does not provide it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Frame rate to use if the header has none
    pub default_frame_rate: Option<f64>,
    /// Unit to use if the header has none
    pub default_unit: Option<TrajectoryUnit>,
}

impl LoadOptions {
    pub fn new(default_frame_rate: Option<f64>, default_unit: Option<TrajectoryUnit>) -> Self {
        Self {
            default_frame_rate,
            default_unit,
        }
    }
}

/// Load a trajectory file into a [`TrajectoryDataset`].
///
/// Coordinates are converted to meters.
///
/// # Errors
///
/// Fails if the path is missing or not a file, if frame rate or unit cannot
/// be resolved from header and defaults, or if a data line is malformed.
pub fn load_trajectory(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<TrajectoryDataset, TrajectoryError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TrajectoryError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(TrajectoryError::NotAFile(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let dataset = parse_trajectory(&content, options)?;

    info!(
        path = %path.display(),
        records = dataset.len(),
        frame_rate = dataset.frame_rate(),
        "loaded trajectory"
    );

    Ok(dataset)
}

/// Parse trajectory file content.
pub fn parse_trajectory(
    content: &str,
    options: &LoadOptions,
) -> Result<TrajectoryDataset, TrajectoryError> {
    let header = parse_header(content);
    let frame_rate = resolve_frame_rate(header.frame_rate, options.default_frame_rate)?;
    let unit = resolve_unit(header.unit, options.default_unit)?;
    debug!(frame_rate, %unit, "resolved trajectory metadata");

    let records = parse_records(content, unit)?;
    if records.is_empty() {
        return Err(TrajectoryError::EmptyFile);
    }

    TrajectoryDataset::new(records, frame_rate)
}

#[derive(Debug, Default, PartialEq)]
struct HeaderInfo {
    frame_rate: Option<f64>,
    unit: Option<TrajectoryUnit>,
}

/// Scan the leading `#` block for metadata.
fn parse_header(content: &str) -> HeaderInfo {
    let mut header = HeaderInfo::default();

    for line in content.lines() {
        if !line.starts_with('#') {
            break;
        }

        if line.contains("framerate") && header.frame_rate.is_none() {
            header.frame_rate = line
                .split_whitespace()
                .find_map(|token| token.parse::<f64>().ok());
        }

        let lower = line.to_lowercase();
        if lower.contains("x/cm") || lower.contains("in cm") {
            header.unit = Some(TrajectoryUnit::Centimeter);
        }
        if lower.contains("x/m") || lower.contains("in m") {
            header.unit = Some(TrajectoryUnit::Meter);
        }
    }

    header
}

fn resolve_frame_rate(parsed: Option<f64>, default: Option<f64>) -> Result<f64, TrajectoryError> {
    let valid = |rate: f64| rate.is_finite() && rate > 0.0;
    match (parsed, default) {
        (None, None) => Err(TrajectoryError::MissingFrameRate),
        (None, Some(default)) if !valid(default) => Err(TrajectoryError::InvalidFrameRate(default)),
        (None, Some(default)) => Ok(default),
        (Some(parsed), None) if !valid(parsed) => Err(TrajectoryError::InvalidFrameRate(parsed)),
        (Some(parsed), None) => Ok(parsed),
        (Some(parsed), Some(default)) if parsed != default => {
            Err(TrajectoryError::FrameRateMismatch { default, parsed })
        }
        (Some(parsed), Some(_)) if !valid(parsed) => Err(TrajectoryError::InvalidFrameRate(parsed)),
        (Some(parsed), Some(_)) => Ok(parsed),
    }
}

fn resolve_unit(
    parsed: Option<TrajectoryUnit>,
    default: Option<TrajectoryUnit>,
) -> Result<TrajectoryUnit, TrajectoryError> {
    match (parsed, default) {
        (None, None) => Err(TrajectoryError::MissingUnit),
        (Some(parsed), Some(default)) if parsed != default => {
            Err(TrajectoryError::UnitMismatch { default, parsed })
        }
        (Some(unit), _) | (None, Some(unit)) => Ok(unit),
    }
}

fn parse_records(
    content: &str,
    unit: TrajectoryUnit,
) -> Result<Vec<TrajectoryRecord>, TrajectoryError> {
    let mut records = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let data = raw.split('#').next().unwrap_or("").trim();
        if data.is_empty() {
            continue;
        }

        let columns: Vec<&str> = data.split_whitespace().collect();
        if columns.len() < 4 {
            return Err(TrajectoryError::Parse {
                line: line_no,
                message: format!(
                    "expected at least 4 columns (ID, frame, X, Y), found {}",
                    columns.len()
                ),
            });
        }

        let id = parse_column::<i64>(columns[0], "ID", line_no)?;
        let frame = parse_column::<i64>(columns[1], "frame", line_no)?;
        let x = parse_column::<f64>(columns[2], "X", line_no)?;
        let y = parse_column::<f64>(columns[3], "Y", line_no)?;

        records.push(TrajectoryRecord::new(
            id,
            frame,
            unit.to_meters(x),
            unit.to_meters(y),
        ));
    }

    Ok(records)
}

fn parse_column<T: std::str::FromStr>(
    token: &str,
    name: &str,
    line: usize,
) -> Result<T, TrajectoryError> {
    token.parse::<T>().map_err(|_| TrajectoryError::Parse {
        line,
        message: format!("invalid {name} value '{token}'"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const METER_FILE: &str = "\
# description: corridor experiment
# framerate: 16.00
# ID frame x/m y/m z/m
1 0 0.0 0.0 1.7
2 0 3.0 4.0 1.8
1 1 0.5 0.0 1.7
";

    #[test]
    fn test_parse_header_metadata() {
        let dataset = parse_trajectory(METER_FILE, &LoadOptions::default()).unwrap();
        assert_eq!(dataset.frame_rate(), 16.0);
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records()[1].x(), 3.0);
        assert_eq!(dataset.records()[1].y(), 4.0);
    }

    #[test]
    fn test_centimeter_conversion() {
        let content = "# framerate: 25\n# x/cm y/cm\n1 0 150 -20\n";
        let dataset = parse_trajectory(content, &LoadOptions::default()).unwrap();
        let record = dataset.records()[0];
        assert!((record.x() - 1.5).abs() < 1e-12);
        assert!((record.y() + 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_defaults_fill_missing_metadata() {
        let content = "1 0 1.0 2.0\n2 0 3.0 4.0\n";
        let options = LoadOptions::new(Some(10.0), Some(TrajectoryUnit::Meter));
        let dataset = parse_trajectory(content, &options).unwrap();
        assert_eq!(dataset.frame_rate(), 10.0);
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_missing_frame_rate() {
        let content = "# in m\n1 0 1.0 2.0\n";
        assert!(matches!(
            parse_trajectory(content, &LoadOptions::default()),
            Err(TrajectoryError::MissingFrameRate)
        ));
    }

    #[test]
    fn test_missing_unit() {
        let content = "# framerate: 8\n1 0 1.0 2.0\n";
        assert!(matches!(
            parse_trajectory(content, &LoadOptions::default()),
            Err(TrajectoryError::MissingUnit)
        ));
    }

    #[test]
    fn test_frame_rate_mismatch() {
        let options = LoadOptions::new(Some(25.0), None);
        assert!(matches!(
            parse_trajectory(METER_FILE, &options),
            Err(TrajectoryError::FrameRateMismatch { default, parsed })
                if default == 25.0 && parsed == 16.0
        ));
    }

    #[test]
    fn test_unit_mismatch() {
        let options = LoadOptions::new(None, Some(TrajectoryUnit::Centimeter));
        assert!(matches!(
            parse_trajectory(METER_FILE, &options),
            Err(TrajectoryError::UnitMismatch { .. })
        ));
    }

    #[test]
    fn test_non_positive_default_frame_rate() {
        let content = "1 0 1.0 2.0\n";
        let options = LoadOptions::new(Some(-4.0), Some(TrajectoryUnit::Meter));
        assert!(matches!(
            parse_trajectory(content, &options),
            Err(TrajectoryError::InvalidFrameRate(r)) if r == -4.0
        ));
    }

    #[test]
    fn test_header_stops_at_first_data_line() {
        let content = "# framerate: 10\n1 0 1.0 2.0\n# x/cm\n2 0 3.0 4.0\n";
        let options = LoadOptions::new(None, Some(TrajectoryUnit::Meter));
        let dataset = parse_trajectory(content, &options).unwrap();
        assert_eq!(dataset.records()[1].x(), 3.0);
    }

    #[test]
    fn test_skips_blank_and_trailing_comments() {
        let content = "# framerate: 10\n# in m\n\n1 0 1.0 2.0 # first\n   \n2 0 3.0 4.0\n";
        let dataset = parse_trajectory(content, &LoadOptions::default()).unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_parse_error_reports_line() {
        let content = "# framerate: 10\n# in m\n1 0 1.0 2.0\n2 zero 3.0 4.0\n";
        match parse_trajectory(content, &LoadOptions::default()) {
            Err(TrajectoryError::Parse { line, message }) => {
                assert_eq!(line, 4);
                assert!(message.contains("frame"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_too_few_columns() {
        let content = "# framerate: 10\n# in m\n1 0 1.0\n";
        assert!(matches!(
            parse_trajectory(content, &LoadOptions::default()),
            Err(TrajectoryError::Parse { line: 3, .. })
        ));
    }

    #[test]
    fn test_empty_data() {
        let content = "# framerate: 10\n# in m\n";
        assert!(matches!(
            parse_trajectory(content, &LoadOptions::default()),
            Err(TrajectoryError::EmptyFile)
        ));
    }
}
