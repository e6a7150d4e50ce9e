use crate::errors::TrajectoryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit in which the coordinates of a trajectory file are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrajectoryUnit {
    Meter,
    Centimeter,
}

impl TrajectoryUnit {
    /// Number of file units per meter.
    pub fn per_meter(self) -> f64 {
        match self {
            Self::Meter => 1.0,
            Self::Centimeter => 100.0,
        }
    }

    /// Convert a coordinate given in this unit to meters.
    #[inline]
    pub fn to_meters(self, value: f64) -> f64 {
        value / self.per_meter()
    }
}

impl fmt::Display for TrajectoryUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meter => write!(f, "meter (m)"),
            Self::Centimeter => write!(f, "centimeter (cm)"),
        }
    }
}

impl FromStr for TrajectoryUnit {
    type Err = TrajectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "meter" | "meters" => Ok(Self::Meter),
            "cm" | "centimeter" | "centimeters" => Ok(Self::Centimeter),
            other => Err(TrajectoryError::UnknownUnit(other.to_string())),
        }
    }
}
