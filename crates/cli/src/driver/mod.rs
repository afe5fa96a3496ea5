//! Plan execution module.

mod runner;
mod stats;

pub use runner::{Runner, RunnerConfig};
pub use stats::RunStats;
