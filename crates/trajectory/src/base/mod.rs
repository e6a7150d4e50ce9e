//! Base types: position records and coordinate units.

pub mod record;
pub mod unit;

pub use record::TrajectoryRecord;
pub use unit::TrajectoryUnit;
