//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const DELIMITER: &str = "From kommentar@blogfill.de";

/// Builder for an archive file inside a temporary directory
pub struct ArchiveBuilder {
    temp_dir: TempDir,
    preamble: String,
    blocks: Vec<String>,
}

impl ArchiveBuilder {
    /// Create a new builder for an empty archive
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, preamble: String::new(), blocks: Vec::new() }
    }

    /// Set text that appears before the first comment block
    pub fn preamble(mut self, preamble: &str) -> Self {
        self.preamble = preamble.to_string();
        self
    }

    /// Append a comment block
    pub fn with_block(mut self, block: CommentBlockBuilder) -> Self {
        self.blocks.push(block.to_block());
        self
    }

    /// Append raw text as a block (the delimiter is added in front)
    pub fn with_raw_block(mut self, raw: &str) -> Self {
        self.blocks.push(format!("{DELIMITER}{raw}"));
        self
    }

    /// Archive text as it will be written to disk
    pub fn contents(&self) -> String {
        format!("{}{}", self.preamble, self.blocks.concat())
    }

    /// Write `archive.mbox` and return the temp dir holding it
    pub fn build(self) -> BuiltArchive {
        let source = self.temp_dir.path().join("archive.mbox");
        fs::write(&source, self.contents()).expect("Failed to write archive");
        BuiltArchive { temp_dir: self.temp_dir, source }
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An archive written to a temporary directory
pub struct BuiltArchive {
    temp_dir: TempDir,
    pub source: PathBuf,
}

impl BuiltArchive {
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Default target path (`archive.mbox.json`)
    pub fn default_target(&self) -> PathBuf {
        self.dir().join("archive.mbox.json")
    }

    pub fn read_default_target(&self) -> String {
        fs::read_to_string(self.default_target()).expect("Failed to read output")
    }
}

/// Builder for one comment notification mail
pub struct CommentBlockBuilder {
    date: Option<String>,
    id: Option<String>,
    name: String,
    message: String,
}

impl CommentBlockBuilder {
    /// Create a block with default values
    pub fn new() -> Self {
        Self {
            date: Some("Mon, 3 Jan 2016 14:05:09 +0100".to_string()),
            id: Some("abc123".to_string()),
            name: "Jane Doe".to_string(),
            message: "Hello world".to_string(),
        }
    }

    /// Set the `Date:` header value
    pub fn date(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }

    /// Set the message id (without angle brackets)
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Leave out the `Message-id:` header
    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }

    /// Leave out the `Date:` header
    pub fn without_date(mut self) -> Self {
        self.date = None;
        self
    }

    /// Set the author name
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Set the HTML message body
    pub fn message(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    /// Render the block, starting with the delimiter line
    pub fn to_block(&self) -> String {
        let mut block = format!("{DELIMITER}  Mon Jan  3 14:05:10 2016\n");
        block.push_str("Return-Path: <kommentar@blogfill.de>\n");
        if let Some(date) = &self.date {
            block.push_str(&format!("Date: {date}\n"));
        }
        block.push_str("From: kommentar@blogfill.de\n");
        block.push_str("Subject: Neuer Kommentar\n");
        if let Some(id) = &self.id {
            block.push_str(&format!("Message-id: <{id}>\n"));
        }
        block.push_str("Content-type: text/html; charset=UTF-8\n\n");
        block.push_str(&format!(
            "<html><body><p><strong>Name</strong>: {}</p><p>{}</p></body></html>\n\n",
            self.name, self.message
        ));
        block
    }
}

impl Default for CommentBlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Three well-formed comments in order
pub fn realistic_archive() -> ArchiveBuilder {
    ArchiveBuilder::new()
        .preamble("Mailbox export\n\n")
        .with_block(
            CommentBlockBuilder::new()
                .id("20160103140509.1@blogfill.de")
                .name("Jane Doe")
                .message("Hello world"),
        )
        .with_block(
            CommentBlockBuilder::new()
                .date("Tue, 12 Jan 2016 08:30:00 +0100")
                .id("20160112083000.2@blogfill.de")
                .name("Max Mustermann")
                .message("Sch&ouml;ner Beitrag!"),
        )
        .with_block(
            CommentBlockBuilder::new()
                .date("Sun, 28 Feb 2016 23:59:59 -0500")
                .id("20160228235959.3@blogfill.de")
                .name("Erika")
                .message("Zeile eins<br />\nZeile zwei"),
        )
}
