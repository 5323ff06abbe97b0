//! Parsers for blog comment archives
//!
//! # Error Handling Strategy
//!
//! Parsing is **fail-fast** per block:
//!
//! - **Splitting** never fails. Text outside any block is dropped.
//!
//! - **Field extraction** returns a typed [`ExtractError`] naming the first missing field, or
//!   the date component whose digits overflow. The caller decides whether this aborts the whole
//!   conversion (the default) or only skips the block.
//!
//! - **Error propagation**: extraction errors are plain `thiserror` values so callers can match
//!   on them; the converter wraps them in `anyhow` context carrying the block index.

pub mod archive;
pub mod fields;

pub use archive::{BLOCK_DELIMITER, split_blocks};
pub use fields::{ExtractError, Field, extract_comment};
