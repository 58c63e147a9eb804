//! Filtering of labeled questionnaire records in plain-text files.
//!
//! The input is a UTF-8 text file of records separated by blank lines, each
//! record a set of `Label: value` lines. The library splits the text into
//! blocks, parses the six known fields out of each block (in any line order),
//! skips incomplete records, applies the feminine-sex / firstname-initial
//! predicate, and serializes the survivors back into the same text shape.
//!
//! The [`pipeline`] module holds the transform stages, [`record`] the data
//! model, and [`files`] the source/sink I/O.

pub mod files;
pub mod pipeline;
pub mod record;

pub use files::FileError;
pub use pipeline::{Alphabet, FilterCriteria, FilterOutcome, IncompleteRecordError, RecordParser};
pub use record::{Field, Record};
