use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

/// Writes a JSON array one element at a time
///
/// The opening bracket is written on construction and the closing bracket by [`finish`],
/// so only the element being serialized is held in memory. Elements are compact and
/// comma-separated with no trailing comma or newline.
///
/// Dropping the writer without calling [`finish`] leaves the array unterminated.
///
/// [`finish`]: JsonArrayWriter::finish
pub struct JsonArrayWriter<W: Write> {
    writer: W,
    count: usize,
}

impl<W: Write> JsonArrayWriter<W> {
    /// Start a new array on `writer`
    pub fn new(mut writer: W) -> Result<Self> {
        writer.write_all(b"[").context("Failed to write array start")?;
        Ok(Self { writer, count: 0 })
    }

    /// Serialize and append one element
    pub fn write_element<T: Serialize>(&mut self, element: &T) -> Result<()> {
        if self.count > 0 {
            self.writer.write_all(b",").context("Failed to write element separator")?;
        }
        serde_json::to_writer(&mut self.writer, element)
            .with_context(|| format!("Failed to write array element {}", self.count))?;
        self.count += 1;
        Ok(())
    }

    /// Close the array, flush, and return the underlying writer with the element count
    pub fn finish(mut self) -> Result<(W, usize)> {
        self.writer.write_all(b"]").context("Failed to write array end")?;
        self.writer.flush().context("Failed to flush output")?;
        Ok((self.writer, self.count))
    }
}
