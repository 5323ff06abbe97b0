//! Archive to JSON conversion.
//!
//! # Error Handling Strategy
//!
//! - **Fail-fast by default**: the first block that cannot be parsed aborts the run. The error
//!   carries the zero-based block index and the missing field.
//! - **Skip mode**: with [`ConvertOptions::skip_malformed`], malformed blocks are logged as
//!   warnings and left out of the output.
//! - **No truncated output**: comments are streamed into a temporary file next to the target,
//!   which replaces the target only after the array is complete. A failed run leaves any
//!   existing target untouched.
//! - I/O errors are always fatal.

use std::fs;
use std::io::{BufWriter, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};
use tempfile::Builder;

use crate::output::JsonArrayWriter;
use crate::parsers::{extract_comment, split_blocks};
use crate::utils::read_archive;

/// Knobs for a single conversion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Log and skip blocks that fail to parse instead of aborting
    pub skip_malformed: bool,
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub converted: usize,
    pub skipped: usize,
}

/// Convert the archive at `source` into a JSON array of comments at `target`
///
/// The whole archive is read up front; comments are then written one at a time.
///
/// # Errors
///
/// Returns an error if the source cannot be read, the target cannot be written, or (unless
/// skipping is enabled) a block is missing one of its fields. On error the target is left as
/// it was before the call.
pub fn convert_archive(
    source: &Path,
    target: &Path,
    options: &ConvertOptions,
) -> Result<ConversionSummary> {
    let contents = read_archive(source)?;

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut builder = Builder::new();
    builder.prefix(".mbox-comments").suffix(".tmp");
    // Same mode as a freshly created file; tempfile defaults to owner-only
    #[cfg(unix)]
    builder.permissions(fs::Permissions::from_mode(0o644));
    let temp = builder
        .tempfile_in(dir)
        .with_context(|| format!("Failed to create output file: {}", target.display()))?;

    // The temp file is deleted on drop if anything below fails
    let (writer, summary) = write_comments(&contents, BufWriter::new(temp), options)?;
    let temp = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .with_context(|| format!("Failed to flush output file: {}", target.display()))?;
    temp.as_file()
        .sync_all()
        .with_context(|| format!("Failed to sync output file: {}", target.display()))?;
    temp.persist(target)
        .with_context(|| format!("Failed to write output file: {}", target.display()))?;

    Ok(summary)
}

/// Parse every block of `contents` and stream the comments to `writer` as a JSON array
///
/// Returns the finished, flushed writer together with the conversion counts.
pub fn write_comments<W: Write>(
    contents: &str,
    writer: W,
    options: &ConvertOptions,
) -> Result<(W, ConversionSummary)> {
    let mut array = JsonArrayWriter::new(writer)?;
    let mut skipped = 0;

    for (index, block) in split_blocks(contents).enumerate() {
        match extract_comment(block) {
            Ok(comment) => {
                debug!("Converted comment block {} ({})", index, comment.id);
                array.write_element(&comment)?;
            }
            Err(e) if options.skip_malformed => {
                warn!("Skipping comment block {}: {}", index, e);
                skipped += 1;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to parse comment block {}", index));
            }
        }
    }

    let (writer, converted) = array.finish()?;
    Ok((writer, ConversionSummary { converted, skipped }))
}
