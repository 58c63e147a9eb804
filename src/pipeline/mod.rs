//! The record extraction pipeline.
//!
//! A stateless transform chain over in-memory text: the source is split into
//! blank-line-delimited blocks, each block is parsed into a record, and the
//! valid records are run through the filter predicate. Malformed blocks are
//! skipped with a warning and never abort the run.
//!
//! # Module Structure
//!
//! - [`split`] - block boundary detection
//! - [`parse`] - per-field extraction and required-field validation
//! - [`filter`] - the predicate and its configuration

mod filter;
mod parse;
mod split;

pub use filter::{Alphabet, FilterCriteria};
pub use parse::{IncompleteRecordError, RecordParser};
pub use split::split_blocks;

use tracing::warn;

use crate::record::Record;

/// The outcome of one pipeline run.
///
/// `count` is kept as a running tally while filtering (it always equals
/// `records.len()`); `skipped` counts blocks that failed validation.
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    pub records: Vec<Record>,
    pub count: usize,
    pub skipped: usize,
}

/// Runs the whole pipeline over the source text.
///
/// Blocks that fail required-field validation are logged and counted in
/// `skipped`; surviving records keep their source order.
pub fn run(text: &str, criteria: &FilterCriteria) -> FilterOutcome {
    let parser = RecordParser::new();
    let mut outcome = FilterOutcome::default();

    for block in split_blocks(text) {
        match parser.parse(block) {
            Ok(record) => {
                if criteria.matches(&record) {
                    outcome.count += 1;
                    outcome.records.push(record);
                }
            }
            Err(err) => {
                outcome.skipped += 1;
                warn!("skipping record: {err}");
            }
        }
    }

    outcome
}
