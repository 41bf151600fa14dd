pub mod cli;
pub mod config;
pub mod console;
pub mod logfile;
pub mod report;
pub mod run;
pub mod types;

pub use cli::CliOptions;
pub use config::Config;
pub use logfile::{FilterRequest, FilterResult, read_filtered};
pub use report::Reporter;
