//! Shared default values for the command line front end.

pub const LOG_LEVEL: &str = "warn";
pub const OUTPUT_FORMAT: &str = "pretty";

// Speed estimation window, in track rows on each side of a position
pub const FRAME_STEP: usize = 5;
