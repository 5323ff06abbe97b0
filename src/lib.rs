//! mbox-comments - Convert blog comment mail archives into JSON
//!
//! A blog comment export is a single text file of concatenated notification mails, each one
//! introduced by the sender line `From kommentar@blogfill.de`. This library:
//!
//! - Splits the archive into comment blocks
//! - Extracts the send date, message id, author name and HTML message of each block
//! - Streams the resulting comments out as one JSON array
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use mbox_comments::{ConvertOptions, convert_archive};
//!
//! let summary = convert_archive(
//!     Path::new("comments.mbox"),
//!     Path::new("comments.mbox.json"),
//!     &ConvertOptions::default(),
//! )?;
//! println!("Converted {} comments", summary.converted);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod converter;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use converter::{ConversionSummary, ConvertOptions, convert_archive};
pub use models::{Comment, Datetime, Time};
pub use parsers::{ExtractError, extract_comment, split_blocks};
pub use utils::default_target_path;
