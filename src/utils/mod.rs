pub mod paths;

pub use paths::{DEFAULT_TARGET_SUFFIX, default_target_path, read_archive};
