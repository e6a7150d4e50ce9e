use anyhow::{Context, Result};
use pedflow_analysis::analysis::utils::{max_value, mean, median, std_dev};
use pedflow_analysis::analysis::{individual_speed, mean_speed_per_frame};
use serde_json::json;
use tracing::info;

use crate::args::{OutputArgs, TrajectoryArgs};
use crate::printing::{csv_document, csv_float, emit, unknown_format};
use crate::utils::load_dataset;

fn summary_lines(values: &[f64]) -> String {
    let mut sorted = values.to_vec();
    format!(
        "Mean: {:.3} m/s\n\
         Median: {:.3} m/s\n\
         Std dev: {:.3} m/s\n\
         Max: {:.3} m/s\n",
        mean(values),
        median(&mut sorted),
        std_dev(values),
        max_value(values).unwrap_or(0.0),
    )
}

pub fn run_individual_speed(
    input: &TrajectoryArgs,
    frame_step: usize,
    output: &OutputArgs,
) -> Result<()> {
    let dataset = load_dataset(input)?;
    info!(frame_step, records = dataset.len(), "computing individual speeds");

    let samples =
        individual_speed(&dataset, frame_step).context("Failed to compute individual speeds")?;

    let content = match output.format.as_str() {
        "pretty" => {
            let speeds: Vec<f64> = samples.iter().map(|s| s.speed).collect();
            format!(
                "\n🏃 Individual Speed\n\
                 ==================\n\
                 File: {}\n\
                 Frame step: {}\n\
                 Samples: {} of {} records\n\
                 \n{}",
                input.file.display(),
                frame_step,
                samples.len(),
                dataset.len(),
                summary_lines(&speeds),
            )
        }
        "json" => serde_json::to_string_pretty(&json!({
            "file": input.file,
            "frame_rate": dataset.frame_rate(),
            "frame_step": frame_step,
            "speeds": samples,
        }))?,
        "csv" => csv_document(
            "id,frame,speed",
            samples
                .iter()
                .map(|s| format!("{},{},{}", s.id, s.frame, csv_float(s.speed))),
        ),
        other => return Err(unknown_format(other)),
    };

    emit(&content, output.output.as_ref())
}

pub fn run_mean_speed(input: &TrajectoryArgs, frame_step: usize, output: &OutputArgs) -> Result<()> {
    let dataset = load_dataset(input)?;
    info!(frame_step, records = dataset.len(), "computing mean speed per frame");

    let (means, samples) =
        mean_speed_per_frame(&dataset, frame_step).context("Failed to compute mean speed")?;

    let content = match output.format.as_str() {
        "pretty" => {
            let speeds: Vec<f64> = means.iter().map(|m| m.speed).collect();
            let empty_frames = means.iter().filter(|m| m.speed == 0.0).count();
            format!(
                "\n🏃 Mean Speed per Frame\n\
                 ======================\n\
                 File: {}\n\
                 Frame step: {}\n\
                 Frames: {} ({} without speed samples or at rest)\n\
                 Samples: {}\n\
                 \n{}",
                input.file.display(),
                frame_step,
                means.len(),
                empty_frames,
                samples.len(),
                summary_lines(&speeds),
            )
        }
        "json" => serde_json::to_string_pretty(&json!({
            "file": input.file,
            "frame_rate": dataset.frame_rate(),
            "frame_step": frame_step,
            "sample_count": samples.len(),
            "mean_speed": means,
        }))?,
        "csv" => csv_document(
            "frame,speed",
            means
                .iter()
                .map(|m| format!("{},{}", m.frame, csv_float(m.speed))),
        ),
        other => return Err(unknown_format(other)),
    };

    emit(&content, output.output.as_ref())
}
