pub mod commands;

pub use commands::{Cli, USAGE, run};
