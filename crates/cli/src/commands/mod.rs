//! Command implementations.

mod info;
mod process;
mod run;
mod validate;

pub use info::run_info;
pub use process::run_process;
pub use run::run_plan;
pub use validate::run_validate;
