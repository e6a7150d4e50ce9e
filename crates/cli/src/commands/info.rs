use anyhow::Result;

use crate::args::TrajectoryArgs;
use crate::utils::load_dataset;

pub fn show_info(input: &TrajectoryArgs) -> Result<()> {
    let dataset = load_dataset(input)?;
    let index = dataset.frame_index();
    let frame_rate = dataset.frame_rate();

    println!("\n🚶 Trajectory Summary");
    println!("====================");
    println!("File: {}", input.file.display());
    println!("Records: {}", dataset.len());
    println!("Pedestrians: {}", dataset.pedestrian_ids().len());

    match dataset.frame_range() {
        Some((first, last)) => {
            println!("Frames: {} ({first}..={last})", index.len());
            println!("Duration: {:.2} s", (last - first) as f64 / frame_rate);
        }
        None => println!("Frames: 0"),
    }

    println!("Frame rate: {frame_rate:.2} fps");
    println!("Max simultaneous pedestrians: {}", index.max_occupancy());

    let co_present = index
        .frames()
        .iter()
        .filter(|slice| slice.distinct_ids >= 2)
        .count();
    println!("Frames with two or more pedestrians: {co_present}");

    Ok(())
}
