use clap::Args;
use pedflow_trajectory::{LoadOptions, TrajectoryUnit};
use std::path::PathBuf;

use crate::defaults;

#[derive(Args, Debug)]
pub struct TrajectoryArgs {
    /// Trajectory file (whitespace-separated columns: ID frame X Y ...)
    pub file: PathBuf,

    /// Frame rate, used if the file header has none
    #[arg(long)]
    pub frame_rate: Option<f64>,

    /// Coordinate unit (m, cm), used if the file header has none
    #[arg(long)]
    pub unit: Option<TrajectoryUnit>,
}

impl TrajectoryArgs {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions::new(self.frame_rate, self.unit)
    }
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output format (pretty, json, csv)
    #[arg(short, long, default_value = defaults::OUTPUT_FORMAT)]
    pub format: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
