//! Splitting raw source text into record blocks.

/// Splits the source text into record blocks.
///
/// The whole text is trimmed first, then split on one blank line (two
/// consecutive newlines). Blocks keep their original order and content.
///
/// A whitespace-only input yields a single empty block; that block later
/// fails required-field validation and is skipped, so the quirk is harmless
/// and kept as-is.
pub fn split_blocks(text: &str) -> Vec<&str> {
    text.trim().split("\n\n").collect()
}
