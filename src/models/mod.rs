//! Data model for converted blog comments.
//!
//! - [`Comment`] - one comment recovered from an archive block
//! - [`Datetime`] - its send date
//! - [`Time`] - time of day and timezone offset of the send date
//!
//! Field names serialize exactly as declared; they form the output format.

pub mod comment;

pub use comment::{Comment, Datetime, Time};
