pub mod pipeline;

pub use pipeline::{ConversionSummary, ConvertOptions, convert_archive, write_comments};
