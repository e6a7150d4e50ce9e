pub mod info;
pub mod pair_distribution;
pub mod speed;
