//! Streaming JSON output

pub mod json_array;

pub use json_array::JsonArrayWriter;
