mod args;
mod commands;
pub mod defaults;
mod logging;
mod printing;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use args::{OutputArgs, TrajectoryArgs};
use commands::{info, pair_distribution, speed};
use logging::{LogConfig, LogFormat};

/// pedflow: Pedestrian Trajectory Analysis
///
/// Computes movement and crowd structure statistics from recorded pedestrian
/// trajectories: individual speeds, mean speed per frame, and the pair
/// distribution function g(r).
#[derive(Parser, Debug)]
#[command(name = "pedflow")]
#[command(author, version, about = "Analyzes pedestrian trajectories", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Log level filter (trace, debug, info, warn, error)
    ///
    /// The RUST_LOG environment variable takes precedence.
    #[arg(long, global = true, default_value = defaults::LOG_LEVEL)]
    log_level: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Info: Summarize a trajectory file.
    ///
    /// Shows record, pedestrian and frame counts, the frame rate and the
    /// highest number of pedestrians present at once.
    Info {
        #[command(flatten)]
        input: TrajectoryArgs,
    },

    /// Compute the pair distribution function g(r).
    ///
    /// Compares the distances between pedestrians present at the same time
    /// with those of a copy whose frames have been randomly shuffled.
    Pdf {
        #[command(flatten)]
        input: TrajectoryArgs,

        /// Width of the distance bins (meters)
        #[arg(short = 'b', long)]
        bin_size: f64,

        /// Random seed for the frame shuffle (default: random)
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compute the speed of every pedestrian at every frame.
    Speed {
        #[command(flatten)]
        input: TrajectoryArgs,

        /// Number of frames before and after each position used for the speed
        #[arg(long, default_value_t = defaults::FRAME_STEP)]
        frame_step: usize,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compute the mean speed of all pedestrians per frame.
    MeanSpeed {
        #[command(flatten)]
        input: TrajectoryArgs,

        /// Number of frames before and after each position used for the speed
        #[arg(long, default_value_t = defaults::FRAME_STEP)]
        frame_step: usize,

        #[command(flatten)]
        output: OutputArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(&LogConfig {
        level: cli.log_level.clone(),
        format: cli.log_format,
    })?;

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Info { input } => {
            info::show_info(&input)?;
        }
        Commands::Pdf {
            input,
            bin_size,
            seed,
            output,
        } => {
            pair_distribution::run_pair_distribution(&input, bin_size, seed, &output)?;
        }
        Commands::Speed {
            input,
            frame_step,
            output,
        } => {
            speed::run_individual_speed(&input, frame_step, &output)?;
        }
        Commands::MeanSpeed {
            input,
            frame_step,
            output,
        } => {
            speed::run_mean_speed(&input, frame_step, &output)?;
        }
    }

    Ok(())
}
