use anyhow::{Context, Result};
use pedflow_trajectory::{load_trajectory, TrajectoryDataset};

use crate::args::TrajectoryArgs;

pub fn load_dataset(input: &TrajectoryArgs) -> Result<TrajectoryDataset> {
    load_trajectory(&input.file, &input.load_options())
        .with_context(|| format!("Failed to load trajectory {}", input.file.display()))
}
