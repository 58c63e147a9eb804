//! Field extraction from a single record block.
//!
//! Each field is located by its own regex, so the lines of a block may appear
//! in any order. A label that never occurs leaves the field empty; a missing
//! (or empty) required field fails the whole block.

use regex::Regex;

use crate::record::{Field, Record, FIELD_ORDER};

/// A block that cannot become a valid record.
///
/// Raised when `Имя` or `Пол` is absent or has an empty value. The caller is
/// expected to skip the block and keep processing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("record is missing required field '{field}'")]
pub struct IncompleteRecordError {
    pub field: Field,
}

/// Parser for record blocks, with one compiled pattern per field.
pub struct RecordParser {
    patterns: [(Field, Regex); 6],
}

impl RecordParser {
    pub fn new() -> Self {
        let patterns = FIELD_ORDER.map(|field| {
            // Value is whatever follows the colon on the label's own line.
            let pattern = format!(r"(?m)^{}:[ \t]*(.+)", regex::escape(field.label()));
            let regex = Regex::new(&pattern).expect("field pattern should be valid");
            (field, regex)
        });
        Self { patterns }
    }

    /// Parses one block into a [`Record`].
    ///
    /// The first match per label wins. Captured values are trimmed. Optional
    /// fields default to the empty string when their label is absent.
    pub fn parse(&self, block: &str) -> Result<Record, IncompleteRecordError> {
        let mut record = Record::default();

        for (field, pattern) in &self.patterns {
            let value = pattern
                .captures(block)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();

            if value.is_empty() && field.is_required() {
                return Err(IncompleteRecordError { field: *field });
            }
            record.set(*field, value);
        }

        Ok(record)
    }
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new()
    }
}
