use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Suffix appended to the source path when no target is given
pub const DEFAULT_TARGET_SUFFIX: &str = ".json";

/// Derives the default output path by appending `.json` to the source path
///
/// The suffix is appended, never substituted for an existing extension.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use mbox_comments::utils::default_target_path;
///
/// assert_eq!(default_target_path(Path::new("archive.mbox")), PathBuf::from("archive.mbox.json"));
/// ```
pub fn default_target_path(source: &Path) -> PathBuf {
    let mut target = OsString::from(source.as_os_str());
    target.push(DEFAULT_TARGET_SUFFIX);
    PathBuf::from(target)
}

/// Reads a whole archive into memory as text
///
/// # Errors
///
/// Returns an error naming the path if the file cannot be read or is not valid UTF-8.
pub fn read_archive(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read archive: {}", path.display()))
}
