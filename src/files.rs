//! Source and sink file I/O.
//!
//! The source file is read whole into memory (the pipeline is a single pass
//! over an in-memory string); the sink is truncated and rewritten on every
//! run.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::record::Record;

/// Errors for source reading and sink writing.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("input file not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("failed to read '{path}': {source}")]
    SourceRead {
        path: PathBuf,
        source: io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    SinkWrite {
        path: PathBuf,
        source: io::Error,
    },
}

/// Reads the whole source file as UTF-8.
///
/// A missing file maps to [`FileError::SourceNotFound`]; any other I/O or
/// decoding failure (including invalid UTF-8) maps to
/// [`FileError::SourceRead`].
pub fn read_source(path: &Path) -> Result<String, FileError> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            FileError::SourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FileError::SourceRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Writes the rendered records to `path`, one blank line between records.
///
/// The file is created or truncated; nothing is appended. Each record block
/// is followed by a blank line, matching the source delimiter format.
pub fn write_records(path: &Path, records: &[Record]) -> Result<(), FileError> {
    let mut file = fs::File::create(path).map_err(|source| FileError::SinkWrite {
        path: path.to_path_buf(),
        source,
    })?;

    for record in records {
        // render() ends with a newline; writeln adds the blank separator line.
        writeln!(file, "{}", record.render()).map_err(|source| FileError::SinkWrite {
            path: path.to_path_buf(),
            source,
        })?;
    }

    Ok(())
}
