/// Sender line that opens every comment block in a blog comment export
pub const BLOCK_DELIMITER: &str = "From kommentar@blogfill.de";

/// Split archive text into comment blocks
///
/// Yields one block per occurrence of [`BLOCK_DELIMITER`], running from just after the
/// delimiter to just before the next one (or the end of the input). Text before the first
/// delimiter is mailbox preamble and is always dropped, so an archive without any delimiter
/// yields nothing.
///
/// # Examples
///
/// ```
/// use mbox_comments::parsers::split_blocks;
///
/// let archive = "preamble\nFrom kommentar@blogfill.de\nfirst\nFrom kommentar@blogfill.de\nsecond";
/// let blocks: Vec<&str> = split_blocks(archive).collect();
/// assert_eq!(blocks, vec!["\nfirst\n", "\nsecond"]);
/// ```
pub fn split_blocks(contents: &str) -> impl Iterator<Item = &str> {
    contents.split(BLOCK_DELIMITER).skip(1)
}
